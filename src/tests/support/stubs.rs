use async_trait::async_trait;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::incoming::use_cases::{
    GetAchievementsError, GetAchievementsUseCase,
};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase, SubmitContactCommand,
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::{
    GetEducationError, GetEducationUseCase,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: &str) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Read-only collections
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsError> {
        Ok(SkillsByCategory::new())
    }
}

#[derive(Default, Clone)]
pub struct StubGetEducationUseCase;

#[async_trait]
impl GetEducationUseCase for StubGetEducationUseCase {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetExperiencesUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetAchievementsUseCase;

#[async_trait]
impl GetAchievementsUseCase for StubGetAchievementsUseCase {
    async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListContactMessagesUseCase;

#[async_trait]
impl ListContactMessagesUseCase for StubListContactMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        Ok(vec![])
    }
}

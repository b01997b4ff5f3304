use actix_web::web;
use std::sync::Arc;

use crate::modules::achievement::application::ports::incoming::use_cases::GetAchievementsUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, SubmitContactUseCase,
};
use crate::modules::education::application::ports::incoming::use_cases::GetEducationUseCase;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::shared::store::{ConnectionState, StoreStatus};
use crate::tests::support::store::FixedStoreStatus;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    store_status: Arc<dyn StoreStatus>,
    project: ProjectUseCases,
    skill: Arc<dyn GetSkillsUseCase + Send + Sync>,
    education: Arc<dyn GetEducationUseCase + Send + Sync>,
    experience: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    achievement: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store_status: Arc::new(FixedStoreStatus::new(ConnectionState::Connected)),
            project: ProjectUseCases {
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase::not_found()),
            },
            skill: Arc::new(StubGetSkillsUseCase),
            education: Arc::new(StubGetEducationUseCase),
            experience: Arc::new(StubGetExperiencesUseCase),
            achievement: Arc::new(StubGetAchievementsUseCase),
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list: Arc::new(StubListContactMessagesUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store_status(mut self, status: impl StoreStatus + 'static) -> Self {
        self.store_status = Arc::new(status);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill = Arc::new(uc);
        self
    }

    pub fn with_get_education(
        mut self,
        uc: impl GetEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_get_achievements(
        mut self,
        uc: impl GetAchievementsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.achievement = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            store_status: self.store_status,
            project: self.project,
            skill: self.skill,
            education: self.education,
            experience: self.experience,
            achievement: self.achievement,
            contact: self.contact,
        })
    }
}

//! Bulk replace of the read-only collections. Contact messages are never
//! touched.

pub mod data;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::modules::achievement::adapter::outgoing::fallback_achievements;
use crate::modules::achievement::adapter::outgoing::sea_orm_entity::achievements;
use crate::modules::education::adapter::outgoing::sea_orm_entity::education;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use data::{EDUCATION, EXPERIENCES, PROJECTS, SKILLS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: u64,
    pub skills: u64,
    pub education: u64,
    pub experiences: u64,
    pub achievements: u64,
}

/// Replaces every seeded table inside one transaction, so a failure leaves
/// the previous content in place.
pub async fn seed_all(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    let base = Utc::now();
    let txn = db.begin().await?;

    projects::Entity::delete_many().exec(&txn).await?;
    let projects = projects::Entity::insert_many(project_rows(base))
        .exec_without_returning(&txn)
        .await?;
    info!(count = projects, "Seeded projects");

    skills::Entity::delete_many().exec(&txn).await?;
    let skills = skills::Entity::insert_many(skill_rows(base))
        .exec_without_returning(&txn)
        .await?;
    info!(count = skills, "Seeded skills");

    education::Entity::delete_many().exec(&txn).await?;
    let education = education::Entity::insert_many(education_rows(base))
        .exec_without_returning(&txn)
        .await?;
    info!(count = education, "Seeded education");

    experiences::Entity::delete_many().exec(&txn).await?;
    let experiences = experiences::Entity::insert_many(experience_rows(base))
        .exec_without_returning(&txn)
        .await?;
    info!(count = experiences, "Seeded experience");

    achievements::Entity::delete_many().exec(&txn).await?;
    let achievements = achievements::Entity::insert_many(achievement_rows(base))
        .exec_without_returning(&txn)
        .await?;
    info!(count = achievements, "Seeded achievements");

    txn.commit().await?;

    Ok(SeedReport {
        projects,
        skills,
        education,
        experiences,
        achievements,
    })
}

// Rows get increasing timestamps so insertion order survives `created_at`
// ordering.
fn stamp(base: DateTime<Utc>, index: usize) -> DateTime<FixedOffset> {
    (base + Duration::milliseconds(index as i64)).fixed_offset()
}

fn project_rows(base: DateTime<Utc>) -> Vec<projects::ActiveModel> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(p.title.to_string()),
            description: Set(p.description.to_string()),
            detailed_description: Set(p.detailed_description.to_string()),
            technologies: Set(json!(p.technologies)),
            image: Set(p.image.to_string()),
            github_url: Set(p.github_url.to_string()),
            live_url: Set(p.live_url.map(str::to_string)),
            featured: Set(p.featured),
            category: Set(p.category.as_str().to_string()),
            created_at: Set(stamp(base, i)),
        })
        .collect()
}

fn skill_rows(base: DateTime<Utc>) -> Vec<skills::ActiveModel> {
    SKILLS
        .iter()
        .enumerate()
        .map(|(i, s)| skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(s.category.as_str().to_string()),
            name: Set(s.name.to_string()),
            level: Set(s.level.as_str().to_string()),
            icon: Set(None),
            created_at: Set(stamp(base, i)),
        })
        .collect()
}

fn education_rows(base: DateTime<Utc>) -> Vec<education::ActiveModel> {
    EDUCATION
        .iter()
        .enumerate()
        .map(|(i, e)| education::ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(e.degree.to_string()),
            institution: Set(e.institution.to_string()),
            year: Set(e.year.to_string()),
            grade: Set(e.grade.to_string()),
            description: Set(Some(e.description.to_string())),
            display_order: Set(e.order),
            created_at: Set(stamp(base, i)),
        })
        .collect()
}

fn experience_rows(base: DateTime<Utc>) -> Vec<experiences::ActiveModel> {
    EXPERIENCES
        .iter()
        .enumerate()
        .map(|(i, e)| experiences::ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(e.company.to_string()),
            position: Set(e.position.to_string()),
            duration: Set(e.duration.to_string()),
            description: Set(e.description.to_string()),
            technologies: Set(json!(e.technologies)),
            kind: Set(e.kind.as_str().to_string()),
            created_at: Set(stamp(base, i)),
        })
        .collect()
}

// The fallback set is the seed set; only the ids differ.
fn achievement_rows(base: DateTime<Utc>) -> Vec<achievements::ActiveModel> {
    fallback_achievements()
        .iter()
        .enumerate()
        .map(|(i, a)| achievements::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(a.title.clone()),
            description: Set(a.description.clone()),
            date: Set(a.date.clone()),
            category: Set(a.category.as_str().to_string()),
            icon: Set(a.icon.clone()),
            created_at: Set(stamp(base, i)),
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Declaration order is the key order of the grouped response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Web,
    Database,
    Tools,
    Cloud,
    Crm,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Web => "web",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Crm => "crm",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "languages" => Ok(SkillCategory::Languages),
            "web" => Ok(SkillCategory::Web),
            "database" => Ok(SkillCategory::Database),
            "tools" => Ok(SkillCategory::Tools),
            "cloud" => Ok(SkillCategory::Cloud),
            "crm" => Ok(SkillCategory::Crm),
            other => Err(format!("Unknown skill category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            other => Err(format!("Unknown skill level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: SkillCategory,
    #[schema(example = "Rust")]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Skills keyed by category; categories with no skills are absent.
pub type SkillsByCategory = BTreeMap<SkillCategory, Vec<Skill>>;

/// Groups while keeping the input order inside each category.
pub fn group_by_category(skills: Vec<Skill>) -> SkillsByCategory {
    let mut grouped = SkillsByCategory::new();
    for skill in skills {
        grouped.entry(skill.category).or_default().push(skill);
    }
    grouped
}

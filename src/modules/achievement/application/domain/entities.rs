use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Competition,
    Certification,
    Organizing,
    Academic,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Competition => "competition",
            AchievementCategory::Certification => "certification",
            AchievementCategory::Organizing => "organizing",
            AchievementCategory::Academic => "academic",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "competition" => Ok(AchievementCategory::Competition),
            "certification" => Ok(AchievementCategory::Certification),
            "organizing" => Ok(AchievementCategory::Organizing),
            "academic" => Ok(AchievementCategory::Academic),
            other => Err(format!("Unknown achievement category: {}", other)),
        }
    }
}

/// `date` is free text ("2024", "2021-2025") and sorts as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "2024")]
    pub date: String,
    pub category: AchievementCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

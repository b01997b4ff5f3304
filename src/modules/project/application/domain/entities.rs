use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Backend,
    Fullstack,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(ProjectCategory::Web),
            "mobile" => Ok(ProjectCategory::Mobile),
            "backend" => Ok(ProjectCategory::Backend),
            "fullstack" => Ok(ProjectCategory::Fullstack),
            other => Err(format!("Unknown project category: {}", other)),
        }
    }
}

/// A portfolio project as served to the client, whichever source it came
/// from. `id` is a UUID string for stored rows and a short synthetic id for
/// fallback rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    #[schema(example = "5")]
    pub id: String,
    #[schema(example = "Salesforce Integration Tool")]
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
}

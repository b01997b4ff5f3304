use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    #[default]
    Internship,
    Fulltime,
    Contract,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Internship => "internship",
            ExperienceType::Fulltime => "fulltime",
            ExperienceType::Contract => "contract",
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internship" => Ok(ExperienceType::Internship),
            "fulltime" => Ok(ExperienceType::Fulltime),
            "contract" => Ok(ExperienceType::Contract),
            other => Err(format!("Unknown experience type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free text, e.g. "Jun 2024 - Aug 2024".
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: ExperienceType,
}

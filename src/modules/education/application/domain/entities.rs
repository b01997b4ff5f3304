use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One education entry. Entries are displayed by ascending `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: String,
    #[schema(example = "Bachelor of Engineering in Information Technology")]
    pub degree: String,
    pub institution: String,
    #[schema(example = "2021-2025")]
    pub year: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_client_field_names() {
        let entry = Education {
            id: "e1".to_string(),
            degree: "HSC".to_string(),
            institution: "Some College".to_string(),
            year: "2021".to_string(),
            grade: "85%".to_string(),
            description: None,
            order: 2,
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["_id"], "e1");
        assert_eq!(json["order"], 2);
        assert!(json.get("description").is_none());
        assert!(json.get("id").is_none());
    }
}

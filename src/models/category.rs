use serde::{Deserialize, Serialize};

/// Labeled grouping of questions, read-only through the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_serializes_type_field() {
        let category = Category {
            id: 1,
            kind: "Science".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({ "id": 1, "type": "Science" })
        );
    }
}

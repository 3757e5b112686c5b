use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Dish, DishId, Rating};

/// Payload handed to the host when the review form commits a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub dish_id: DishId,
    pub rating: Rating,
    pub author: String,
    pub comment: String,
}

/// Dish and comment data as supplied by the external provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuFixture {
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_without_comments_defaults_to_empty() {
        let raw = r#"{"dishes":[{"id":0,"name":"Uthappizza","image":"images/uthappizza.png","description":"A unique combination"}]}"#;
        let fixture: MenuFixture = serde_json::from_str(raw).expect("fixture");
        assert_eq!(fixture.dishes.len(), 1);
        assert!(fixture.comments.is_empty());
        assert!(!fixture.dishes[0].featured);
    }

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let submission = ReviewSubmission {
            dish_id: DishId(3),
            rating: Rating::MAX,
            author: "Alice".into(),
            comment: "Loved it".into(),
        };
        let json = serde_json::to_value(&submission).expect("json");
        assert_eq!(json["dishId"], 3);
        assert_eq!(json["rating"], 5);
        assert_eq!(json["comment"], "Loved it");
    }
}

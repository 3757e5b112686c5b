use shared::domain::{CommentId, DishId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed menu fixture: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("dish id {0} appears more than once")]
    DuplicateDish(DishId),
    #[error("comment {comment_id} references unknown dish {dish_id}")]
    UnknownDish {
        comment_id: CommentId,
        dish_id: DishId,
    },
    #[error("comment id {comment_id} appears more than once for dish {dish_id}")]
    DuplicateComment {
        comment_id: CommentId,
        dish_id: DishId,
    },
    #[error("no comment id is available after {0}")]
    CommentIdExhausted(CommentId),
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use shared::{
    domain::{Comment, CommentId, DishId},
    protocol::ReviewSubmission,
};

use crate::error::CatalogError;

/// Append-only comment lists keyed by dish.
///
/// Insertion order is display order. Identifiers are handed out from a single
/// store-wide sequence that starts past the highest loaded id. `next_id` is
/// `None` once `i64::MAX` has been handed out.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    by_dish: HashMap<DishId, Vec<Comment>>,
    next_id: Option<i64>,
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self {
            by_dish: HashMap::new(),
            next_id: Some(0),
        }
    }
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from provider comments, keeping their order within each dish.
    pub fn from_comments(
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Self, CatalogError> {
        let mut store = Self::new();
        for comment in comments {
            let list = store.by_dish.entry(comment.dish_id).or_default();
            if list.iter().any(|existing| existing.id == comment.id) {
                return Err(CatalogError::DuplicateComment {
                    comment_id: comment.id,
                    dish_id: comment.dish_id,
                });
            }
            let after = comment
                .id
                .0
                .checked_add(1)
                .ok_or(CatalogError::CommentIdExhausted(comment.id))?;
            store.next_id = store.next_id.max(Some(after));
            list.push(comment);
        }
        Ok(store)
    }

    /// Appends a comment under the next free id. Fails without storing anything
    /// once the id sequence is used up.
    pub fn append(
        &mut self,
        submission: ReviewSubmission,
        date: DateTime<Utc>,
    ) -> Result<&Comment, CatalogError> {
        let id = self
            .next_id
            .ok_or(CatalogError::CommentIdExhausted(CommentId(i64::MAX)))?;
        let comment = Comment {
            id: CommentId(id),
            dish_id: submission.dish_id,
            rating: submission.rating,
            author: submission.author,
            comment: submission.comment,
            date,
        };
        self.next_id = id.checked_add(1);

        let list = self.by_dish.entry(comment.dish_id).or_default();
        list.push(comment);
        Ok(&list[list.len() - 1])
    }

    /// Comments for `dish_id`, or `None` when the dish has never been reviewed.
    pub fn comments_for(&self, dish_id: DishId) -> Option<&[Comment]> {
        self.by_dish.get(&dish_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_dish.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "tests/review_store_tests.rs"]
mod tests;

//! Dish detail view model.
//!
//! Rendering is a pure function of the load flags, the resolved dish, its
//! comments and the review form. The first matching case wins: loading, then
//! error, then dish detail, then nothing.

use chrono::{DateTime, Utc};
use shared::domain::{Comment, CommentId, Dish};

use crate::review_form::ReviewForm;

pub const MENU_CRUMB: &str = "Menu";

#[derive(Debug, Clone, Copy)]
pub struct DetailProps<'a> {
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub dish: Option<&'a Dish>,
    /// `None` means the dish has no comments yet.
    pub comments: Option<&'a [Comment]>,
    pub form: &'a ReviewForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DishDetailView<'a> {
    Loading,
    Error(&'a str),
    Detail(DetailPage<'a>),
    Empty,
}

impl DishDetailView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, DishDetailView::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage<'a> {
    pub breadcrumb: [&'a str; 2],
    pub dish: &'a Dish,
    pub comments: Vec<CommentLine<'a>>,
    pub form: &'a ReviewForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine<'a> {
    pub id: CommentId,
    pub body: &'a str,
    pub author: &'a str,
    pub date: String,
}

impl<'a> From<&'a Comment> for CommentLine<'a> {
    fn from(comment: &'a Comment) -> Self {
        Self {
            id: comment.id,
            body: &comment.comment,
            author: &comment.author,
            date: format_comment_date(comment.date),
        }
    }
}

pub fn render(props: DetailProps<'_>) -> DishDetailView<'_> {
    if props.is_loading {
        return DishDetailView::Loading;
    }
    if let Some(message) = props.error {
        return DishDetailView::Error(message);
    }
    let Some(dish) = props.dish else {
        return DishDetailView::Empty;
    };

    let comments = props
        .comments
        .unwrap_or_default()
        .iter()
        .map(CommentLine::from)
        .collect();

    DishDetailView::Detail(DetailPage {
        breadcrumb: [MENU_CRUMB, dish.name.as_str()],
        dish,
        comments,
        form: props.form,
    })
}

/// Long-form en-US date, e.g. `October 16, 2012`.
pub fn format_comment_date(date: DateTime<Utc>) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
#[path = "tests/dish_detail_tests.rs"]
mod tests;

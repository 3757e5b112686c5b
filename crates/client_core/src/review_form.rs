//! Review submission form as a pure reducer.
//!
//! The form is either closed or open. While open it holds a draft whose fields
//! carry `{value, touched, errors}`; errors are recomputed on every change and
//! only surfaced once the field has been touched. A successful submit emits a
//! [`ReviewSubmission`] and returns a fresh closed form; the caller is
//! responsible for committing the submission before installing that state.

use shared::{
    domain::{DishId, Rating},
    protocol::ReviewSubmission,
};

use crate::validation::{error_message, failing_rules, Rule, AUTHOR_RULES, NO_RULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Rating,
    Author,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
    errors: Vec<Rule>,
    rules: &'static [Rule],
}

impl FieldState {
    fn new(rules: &'static [Rule]) -> Self {
        Self {
            value: String::new(),
            touched: false,
            errors: failing_rules(rules, ""),
            rules,
        }
    }

    fn set_value(&mut self, value: String) {
        self.errors = failing_rules(self.rules, &value);
        self.value = value;
        self.touched = true;
    }

    fn touch(&mut self) {
        self.touched = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Rule] {
        &self.errors
    }

    /// Error text to show next to the field, if any.
    pub fn visible_error(&self) -> Option<String> {
        (self.touched && !self.errors.is_empty()).then(|| error_message(&self.errors))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    OpenRequested,
    Dismissed,
    RatingChanged(Rating),
    AuthorChanged(String),
    CommentChanged(String),
    FieldBlurred(FormField),
    Submitted { dish_id: DishId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    None,
    /// Event had no meaning in the current state.
    Ignored,
    /// Submit attempted with failing fields; the draft is kept.
    Rejected,
    Submitted(ReviewSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub form: ReviewForm,
    pub effect: FormEffect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    visibility: Visibility,
    rating: Option<Rating>,
    rating_touched: bool,
    author: FieldState,
    comment: FieldState,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            visibility: Visibility::Closed,
            rating: None,
            rating_touched: false,
            author: FieldState::new(AUTHOR_RULES),
            comment: FieldState::new(NO_RULES),
        }
    }
}

impl ReviewForm {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn is_rating_touched(&self) -> bool {
        self.rating_touched
    }

    pub fn author(&self) -> &FieldState {
        &self.author
    }

    pub fn comment(&self) -> &FieldState {
        &self.comment
    }

    pub fn is_valid(&self) -> bool {
        self.author.is_valid() && self.comment.is_valid()
    }

    pub fn reduce(self, event: FormEvent) -> Transition {
        match (self.visibility, event) {
            (Visibility::Closed, FormEvent::OpenRequested) => Transition {
                form: Self {
                    visibility: Visibility::Open,
                    ..Self::default()
                },
                effect: FormEffect::None,
            },
            (Visibility::Closed, _) | (Visibility::Open, FormEvent::OpenRequested) => {
                self.unchanged(FormEffect::Ignored)
            }
            (Visibility::Open, FormEvent::Dismissed) => Transition {
                form: Self::default(),
                effect: FormEffect::None,
            },
            (Visibility::Open, FormEvent::RatingChanged(rating)) => {
                let mut form = self;
                form.rating = Some(rating);
                form.rating_touched = true;
                form.unchanged(FormEffect::None)
            }
            (Visibility::Open, FormEvent::AuthorChanged(value)) => {
                let mut form = self;
                form.author.set_value(value);
                form.unchanged(FormEffect::None)
            }
            (Visibility::Open, FormEvent::CommentChanged(value)) => {
                let mut form = self;
                form.comment.set_value(value);
                form.unchanged(FormEffect::None)
            }
            (Visibility::Open, FormEvent::FieldBlurred(field)) => {
                let mut form = self;
                match field {
                    FormField::Rating => form.rating_touched = true,
                    FormField::Author => form.author.touch(),
                    FormField::Comment => form.comment.touch(),
                }
                form.unchanged(FormEffect::None)
            }
            (Visibility::Open, FormEvent::Submitted { dish_id }) => self.submit(dish_id),
        }
    }

    fn submit(mut self, dish_id: DishId) -> Transition {
        if !self.is_valid() {
            self.author.touch();
            self.comment.touch();
            return self.unchanged(FormEffect::Rejected);
        }

        let submission = ReviewSubmission {
            dish_id,
            rating: self.rating.unwrap_or(Rating::MIN),
            author: self.author.value,
            comment: self.comment.value,
        };
        Transition {
            form: Self::default(),
            effect: FormEffect::Submitted(submission),
        }
    }

    fn unchanged(self, effect: FormEffect) -> Transition {
        Transition { form: self, effect }
    }
}

#[cfg(test)]
#[path = "tests/review_form_tests.rs"]
mod tests;

use chrono::Utc;
use shared::{
    domain::{Comment, Dish, DishId},
    error::LoadError,
    protocol::{MenuFixture, ReviewSubmission},
};
use tracing::{debug, info, warn};

pub mod dish_detail;
pub mod error;
pub mod review_form;
pub mod review_store;
pub mod selection;
pub mod validation;

pub use dish_detail::{DetailProps, DishDetailView};
pub use error::CatalogError;
pub use review_form::{FormEffect, FormEvent, FormField, ReviewForm, Visibility};
pub use review_store::ReviewStore;
pub use selection::{Route, SelectionController};

/// Receives every review the form commits, after it has been appended to the store.
pub trait SubmissionListener {
    fn on_review_submitted(&mut self, submission: &ReviewSubmission);
}

pub struct IgnoreSubmissions;

impl SubmissionListener for IgnoreSubmissions {
    fn on_review_submitted(&mut self, _submission: &ReviewSubmission) {}
}

impl<F> SubmissionListener for F
where
    F: FnMut(&ReviewSubmission),
{
    fn on_review_submitted(&mut self, submission: &ReviewSubmission) {
        self(submission)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    DishSelected(DishId),
    SelectionCleared,
    RouteChanged(String),
    LoadStarted,
    LoadFailed(LoadError),
    LoadFinished,
    Form(FormEvent),
}

/// What a dispatched event changed, for callers that want to react to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Applied,
    Ignored,
    ReviewRejected,
    /// The draft was valid but the store could not take it; the form stays open.
    ReviewNotStored,
    ReviewAdded(Comment),
}

#[derive(Debug, Default)]
struct LoadState {
    is_loading: bool,
    error: Option<LoadError>,
}

/// Single-owner host for the menu: selection, comments, review form and load status.
///
/// Every mutation goes through `&mut self`, so an appended review is always
/// visible before the closed form state is.
pub struct MenuClient<L: SubmissionListener> {
    selection: SelectionController,
    reviews: ReviewStore,
    form: ReviewForm,
    load: LoadState,
    listener: L,
}

impl<L: SubmissionListener> MenuClient<L> {
    pub fn new(selection: SelectionController, reviews: ReviewStore, listener: L) -> Self {
        Self {
            selection,
            reviews,
            form: ReviewForm::default(),
            load: LoadState::default(),
            listener,
        }
    }

    pub fn from_fixture(fixture: MenuFixture, listener: L) -> Result<Self, CatalogError> {
        let selection = SelectionController::new(fixture.dishes)?;
        if let Some(orphan) = fixture
            .comments
            .iter()
            .find(|comment| !selection.contains(comment.dish_id))
        {
            return Err(CatalogError::UnknownDish {
                comment_id: orphan.id,
                dish_id: orphan.dish_id,
            });
        }
        let reviews = ReviewStore::from_comments(fixture.comments)?;
        info!(
            dishes = selection.dishes().len(),
            comments = reviews.len(),
            "loaded menu fixture"
        );
        Ok(Self::new(selection, reviews, listener))
    }

    pub fn from_json(raw: &str, listener: L) -> Result<Self, CatalogError> {
        let fixture: MenuFixture = serde_json::from_str(raw)?;
        Self::from_fixture(fixture, listener)
    }

    pub fn dishes(&self) -> &[Dish] {
        self.selection.dishes()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn reviews(&self) -> &ReviewStore {
        &self.reviews
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn selected_dish(&self) -> Option<&Dish> {
        self.selection.resolve()
    }

    pub fn detail_view(&self) -> DishDetailView<'_> {
        let dish = self.selection.resolve();
        dish_detail::render(DetailProps {
            is_loading: self.load.is_loading,
            error: self.load.error.as_ref().map(LoadError::message),
            dish,
            comments: dish.and_then(|dish| self.reviews.comments_for(dish.id)),
            form: &self.form,
        })
    }

    pub fn dispatch(&mut self, event: MenuEvent) -> MenuOutcome {
        match event {
            MenuEvent::DishSelected(dish_id) => {
                debug!(dish_id = dish_id.0, "dish selected");
                let previous = self.selection.selected();
                self.selection.select(dish_id);
                self.discard_stale_draft(previous);
                MenuOutcome::Applied
            }
            MenuEvent::SelectionCleared => {
                debug!("selection cleared");
                let previous = self.selection.selected();
                self.selection.clear();
                self.discard_stale_draft(previous);
                MenuOutcome::Applied
            }
            MenuEvent::RouteChanged(path) => {
                let previous = self.selection.selected();
                match self.selection.navigate(&path) {
                    Route::NotFound => {
                        warn!(path = %path, "unknown route");
                        MenuOutcome::Ignored
                    }
                    route => {
                        debug!(path = %path, ?route, "route applied");
                        self.discard_stale_draft(previous);
                        MenuOutcome::Applied
                    }
                }
            }
            MenuEvent::LoadStarted => {
                self.load = LoadState {
                    is_loading: true,
                    error: None,
                };
                MenuOutcome::Applied
            }
            MenuEvent::LoadFailed(error) => {
                warn!(code = ?error.code, message = %error.message, "upstream load failed");
                self.load = LoadState {
                    is_loading: false,
                    error: Some(error),
                };
                MenuOutcome::Applied
            }
            MenuEvent::LoadFinished => {
                self.load = LoadState::default();
                MenuOutcome::Applied
            }
            MenuEvent::Form(event) => self.apply_form_event(event),
        }
    }

    /// Opens the review form for the currently selected dish.
    pub fn open_review_form(&mut self) -> MenuOutcome {
        self.dispatch(MenuEvent::Form(FormEvent::OpenRequested))
    }

    /// Submits the draft against the selected dish. Ignored when nothing resolves.
    pub fn submit_review(&mut self) -> MenuOutcome {
        let Some(dish_id) = self.selection.resolve().map(|dish| dish.id) else {
            debug!("review submit without a resolved dish");
            return MenuOutcome::Ignored;
        };
        self.dispatch(MenuEvent::Form(FormEvent::Submitted { dish_id }))
    }

    /// A draft belongs to the dish it was started on; moving away drops it.
    fn discard_stale_draft(&mut self, previous: Option<DishId>) {
        if self.selection.selected() != previous && self.form != ReviewForm::default() {
            debug!("selection changed, review draft discarded");
            self.form = ReviewForm::default();
        }
    }

    fn apply_form_event(&mut self, event: FormEvent) -> MenuOutcome {
        let draft = match event {
            FormEvent::Submitted { dish_id } => {
                let shown = self.selection.resolve().map(|dish| dish.id);
                if shown != Some(dish_id) {
                    warn!(
                        dish_id = dish_id.0,
                        ?shown,
                        "review submitted for a dish not on screen"
                    );
                    return MenuOutcome::Ignored;
                }
                Some(self.form.clone())
            }
            _ => None,
        };

        let transition = std::mem::take(&mut self.form).reduce(event);
        let outcome = match transition.effect {
            FormEffect::None => MenuOutcome::Applied,
            FormEffect::Ignored => {
                debug!("form event ignored in current state");
                MenuOutcome::Ignored
            }
            FormEffect::Rejected => {
                warn!(
                    author_errors = transition.form.author().errors().len(),
                    "review submission rejected"
                );
                MenuOutcome::ReviewRejected
            }
            FormEffect::Submitted(submission) => {
                match self.reviews.append(submission.clone(), Utc::now()) {
                    Ok(comment) => {
                        let comment = comment.clone();
                        info!(
                            dish_id = comment.dish_id.0,
                            comment_id = comment.id.0,
                            rating = comment.rating.value(),
                            "review added"
                        );
                        self.listener.on_review_submitted(&submission);
                        MenuOutcome::ReviewAdded(comment)
                    }
                    Err(err) => {
                        warn!(error = %err, "review not stored");
                        self.form = draft.unwrap_or(transition.form);
                        return MenuOutcome::ReviewNotStored;
                    }
                }
            }
        };
        self.form = transition.form;
        outcome
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

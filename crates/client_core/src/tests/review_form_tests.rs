use super::*;

fn open_form() -> ReviewForm {
    ReviewForm::default().reduce(FormEvent::OpenRequested).form
}

fn fill(form: ReviewForm, rating: &str, author: &str, comment: &str) -> ReviewForm {
    let rating = rating.parse::<Rating>().expect("rating");
    [
        FormEvent::RatingChanged(rating),
        FormEvent::AuthorChanged(author.to_string()),
        FormEvent::CommentChanged(comment.to_string()),
    ]
    .into_iter()
    .fold(form, |form, event| form.reduce(event).form)
}

#[test]
fn form_starts_closed_and_opens_on_request() {
    let form = ReviewForm::default();
    assert_eq!(form.visibility(), Visibility::Closed);

    let transition = form.reduce(FormEvent::OpenRequested);
    assert!(transition.form.is_open());
    assert_eq!(transition.effect, FormEffect::None);
}

#[test]
fn edits_while_closed_are_ignored() {
    let transition = ReviewForm::default().reduce(FormEvent::AuthorChanged("Alice".into()));
    assert_eq!(transition.effect, FormEffect::Ignored);
    assert_eq!(transition.form, ReviewForm::default());

    let transition = ReviewForm::default().reduce(FormEvent::Submitted { dish_id: DishId(0) });
    assert_eq!(transition.effect, FormEffect::Ignored);
    assert!(!transition.form.is_open());
}

#[test]
fn errors_are_hidden_until_the_field_is_touched() {
    let form = open_form();
    assert!(!form.author().is_valid());
    assert!(!form.author().is_touched());
    assert_eq!(form.author().visible_error(), None);

    let form = form.reduce(FormEvent::FieldBlurred(FormField::Author)).form;
    assert_eq!(
        form.author().visible_error().as_deref(),
        Some("Required; Should be greater than 2 characters; ")
    );
}

#[test]
fn error_clears_once_the_value_passes() {
    let form = open_form()
        .reduce(FormEvent::AuthorChanged("Al".into()))
        .form;
    assert_eq!(
        form.author().visible_error().as_deref(),
        Some("Should be greater than 2 characters; ")
    );

    let form = form.reduce(FormEvent::AuthorChanged("Ali".into())).form;
    assert_eq!(form.author().visible_error(), None);
    assert!(form.author().is_valid());
}

#[test]
fn short_author_is_rejected_and_form_stays_open() {
    let form = fill(open_form(), "3", "Al", "Great!");
    let transition = form.reduce(FormEvent::Submitted { dish_id: DishId(3) });

    assert_eq!(transition.effect, FormEffect::Rejected);
    assert!(transition.form.is_open());
    assert_eq!(transition.form.author().value(), "Al");
    assert_eq!(transition.form.comment().value(), "Great!");
    assert_eq!(
        transition.form.author().visible_error().as_deref(),
        Some("Should be greater than 2 characters; ")
    );
}

#[test]
fn untouched_empty_submit_surfaces_errors() {
    let transition = open_form().reduce(FormEvent::Submitted { dish_id: DishId(1) });
    assert_eq!(transition.effect, FormEffect::Rejected);
    assert!(transition.form.author().is_touched());
    assert!(transition.form.author().visible_error().is_some());
    assert_eq!(transition.form.comment().visible_error(), None);
}

#[test]
fn long_author_is_rejected() {
    let form = fill(open_form(), "4", "Bartholomew Simpson", "");
    let transition = form.reduce(FormEvent::Submitted { dish_id: DishId(0) });
    assert_eq!(transition.effect, FormEffect::Rejected);
    assert!(transition.form.is_open());
}

#[test]
fn valid_draft_emits_submission_and_closes() {
    let form = fill(open_form(), "5", "Alice", "Loved it");
    let transition = form.reduce(FormEvent::Submitted { dish_id: DishId(3) });

    assert_eq!(
        transition.effect,
        FormEffect::Submitted(ReviewSubmission {
            dish_id: DishId(3),
            rating: Rating::MAX,
            author: "Alice".into(),
            comment: "Loved it".into(),
        })
    );
    assert_eq!(transition.form, ReviewForm::default());
}

#[test]
fn unset_rating_submits_as_lowest_option() {
    let form = open_form()
        .reduce(FormEvent::AuthorChanged("Bob Dylan".into()))
        .form;
    let transition = form.reduce(FormEvent::Submitted { dish_id: DishId(2) });
    match transition.effect {
        FormEffect::Submitted(submission) => {
            assert_eq!(submission.rating, Rating::MIN);
            assert!(submission.comment.is_empty());
        }
        other => panic!("expected submission, got {other:?}"),
    }
}

#[test]
fn dismiss_discards_the_draft() {
    let form = fill(open_form(), "2", "Carol", "meh");
    let transition = form.reduce(FormEvent::Dismissed);
    assert_eq!(transition.effect, FormEffect::None);
    assert_eq!(transition.form, ReviewForm::default());

    let reopened = transition.form.reduce(FormEvent::OpenRequested).form;
    assert_eq!(reopened.author().value(), "");
    assert_eq!(reopened.rating(), None);
}

#[test]
fn reopening_an_open_form_keeps_the_draft() {
    let form = fill(open_form(), "2", "Carol", "meh");
    let transition = form.clone().reduce(FormEvent::OpenRequested);
    assert_eq!(transition.effect, FormEffect::Ignored);
    assert_eq!(transition.form, form);
}

//! Plain-text rendering of the menu and dish detail views.

use client_core::{dish_detail::DetailPage, review_form::ReviewForm, DishDetailView};
use shared::domain::{Dish, Rating};

pub fn render_menu(dishes: &[Dish]) -> String {
    let mut out = String::from("Menu\n");
    for dish in dishes {
        out.push_str(&format!("  [{}] {}\n", dish.id, dish.name));
    }
    out
}

pub fn render_detail(view: &DishDetailView<'_>) -> String {
    match view {
        DishDetailView::Loading => "Loading . . .\n".to_string(),
        DishDetailView::Error(message) => format!("{message}\n"),
        DishDetailView::Detail(page) => render_page(page),
        DishDetailView::Empty => String::new(),
    }
}

fn render_page(page: &DetailPage<'_>) -> String {
    let dish = page.dish;
    let mut out = format!(
        "{}\n\n{}\n{}\n{}\n",
        page.breadcrumb.join(" / "),
        dish.name,
        "-".repeat(dish.name.chars().count()),
        dish.image
    );
    if let Some(price) = dish.price.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!("${price}\n"));
    }
    out.push_str(&format!("{}\n\nComments\n", dish.description));
    for line in &page.comments {
        out.push_str(&format!("  {}\n  -- {}, {}\n", line.body, line.author, line.date));
    }

    out.push_str(&render_form(page.form));
    out
}

fn render_form(form: &ReviewForm) -> String {
    if !form.is_open() {
        return "\n[Submit Comment]\n".to_string();
    }

    let options: Vec<String> = Rating::options().map(|r| r.to_string()).collect();
    let rating = form.rating().unwrap_or(Rating::MIN);
    let mut out = format!(
        "\nSubmit Comment\n  Rating ({}): {rating}\n  Your Name: {}\n",
        options.join("/"),
        form.author().value()
    );
    if let Some(error) = form.author().visible_error() {
        out.push_str(&format!("    {error}\n"));
    }
    out.push_str(&format!("  Comment: {}\n", form.comment().value()));
    out
}

#[cfg(test)]
mod tests {
    use client_core::{FormEvent, IgnoreSubmissions, MenuClient, MenuEvent};
    use shared::domain::DishId;

    use super::*;

    const FIXTURE: &str = include_str!("../fixtures/menu.json");

    #[test]
    fn menu_lists_every_dish() {
        let client = MenuClient::from_json(FIXTURE, IgnoreSubmissions).expect("menu");
        let text = render_menu(client.dishes());
        assert!(text.contains("[0] Uthappizza"));
        assert!(text.contains("[3] ElaiCheese Cake"));
    }

    #[test]
    fn detail_shows_comments_with_long_dates() {
        let mut client = MenuClient::from_json(FIXTURE, IgnoreSubmissions).expect("menu");
        client.dispatch(MenuEvent::DishSelected(DishId(0)));
        let text = render_detail(&client.detail_view());

        assert!(text.starts_with("Menu / Uthappizza"));
        assert!(text.contains("-- John Lemon, October 16, 2012"));
        assert!(text.contains("[Submit Comment]"));
    }

    #[test]
    fn open_form_shows_touched_errors() {
        let mut client = MenuClient::from_json(FIXTURE, IgnoreSubmissions).expect("menu");
        client.dispatch(MenuEvent::DishSelected(DishId(1)));
        client.open_review_form();
        client.dispatch(MenuEvent::Form(FormEvent::AuthorChanged("Al".into())));

        let text = render_detail(&client.detail_view());
        assert!(text.contains("Your Name: Al"));
        assert!(text.contains("Should be greater than 2 characters; "));
    }

    #[test]
    fn unresolved_selection_renders_nothing() {
        let mut client = MenuClient::from_json(FIXTURE, IgnoreSubmissions).expect("menu");
        client.dispatch(MenuEvent::DishSelected(DishId(40)));
        assert!(render_detail(&client.detail_view()).is_empty());
    }

    #[test]
    fn open_form_lists_every_field_line() {
        let mut client = MenuClient::from_json(FIXTURE, IgnoreSubmissions).expect("menu");
        client.dispatch(MenuEvent::DishSelected(DishId(1)));
        client.open_review_form();
        client.dispatch(MenuEvent::Form(FormEvent::CommentChanged("Crunchy".into())));

        let text = render_detail(&client.detail_view());
        assert!(text.ends_with(
            "\nSubmit Comment\n  Rating (1/2/3/4/5): 1\n  Your Name: \n  Comment: Crunchy\n"
        ));
    }
}

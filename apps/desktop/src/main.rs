use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{FormEvent, MenuClient, MenuEvent, MenuOutcome, SubmissionListener};
use shared::{
    domain::{DishId, Rating},
    protocol::ReviewSubmission,
};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

const BUNDLED_MENU: &str = include_str!("../fixtures/menu.json");

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; missing files fall back to defaults.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Route to open, e.g. `/menu/2`.
    #[arg(long, conflicts_with = "dish")]
    route: Option<String>,
    #[arg(long)]
    dish: Option<i64>,
    /// Submit a review under this name for the selected dish.
    #[arg(long)]
    author: Option<String>,
    #[arg(long, requires = "author")]
    rating: Option<Rating>,
    #[arg(long, requires = "author")]
    comment: Option<String>,
}

#[derive(Default)]
struct Outbox {
    submissions: Vec<ReviewSubmission>,
}

impl SubmissionListener for Outbox {
    fn on_review_submitted(&mut self, submission: &ReviewSubmission) {
        self.submissions.push(submission.clone());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(&args.config)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let raw = match &settings.fixture_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read menu fixture '{}'", path.display()))?,
        None => BUNDLED_MENU.to_string(),
    };
    let mut client =
        MenuClient::from_json(&raw, Outbox::default()).context("failed to load menu fixture")?;

    if let Some(route) = args.route {
        if client.dispatch(MenuEvent::RouteChanged(route.clone())) == MenuOutcome::Ignored {
            bail!("unknown route '{route}'");
        }
    } else if let Some(dish) = args.dish {
        client.dispatch(MenuEvent::DishSelected(DishId(dish)));
    }

    if let Some(author) = args.author {
        submit_review(&mut client, args.rating, author, args.comment.unwrap_or_default());
    }

    match client.selection().selected() {
        None => print!("{}", render::render_menu(client.dishes())),
        Some(_) => print!("{}", render::render_detail(&client.detail_view())),
    }

    for submission in &client.listener().submissions {
        println!("{}", serde_json::to_string(submission)?);
    }

    Ok(())
}

fn submit_review(
    client: &mut MenuClient<Outbox>,
    rating: Option<Rating>,
    author: String,
    comment: String,
) {
    client.open_review_form();
    if let Some(rating) = rating {
        client.dispatch(MenuEvent::Form(FormEvent::RatingChanged(rating)));
    }
    client.dispatch(MenuEvent::Form(FormEvent::AuthorChanged(author)));
    client.dispatch(MenuEvent::Form(FormEvent::CommentChanged(comment)));

    match client.submit_review() {
        MenuOutcome::ReviewAdded(comment) => {
            tracing::info!(comment_id = comment.id.0, "review submitted");
        }
        MenuOutcome::ReviewRejected => {
            tracing::warn!("review rejected; see the form errors below");
        }
        MenuOutcome::ReviewNotStored => {
            tracing::warn!("review could not be stored; the draft is still open");
        }
        _ => tracing::warn!("no dish selected; review not submitted"),
    }
}

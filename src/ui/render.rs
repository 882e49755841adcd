//! Page rendering. Pure: takes a state snapshot, returns HTML.

use serde::Serialize;
use tera::{Context, Tera};

use super::state::{DEFAULT_PASSWORD, MAX_TOP_K, MIN_TOP_K, UiState};
use crate::recommend::models::Mode;

const INDEX_TEMPLATE: &str = "index.html";

#[derive(Serialize)]
struct ModeOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct RecommendationRow<'a> {
    rank: usize,
    movie_id: i64,
    title: &'a str,
    score: String,
    reason: &'a str,
}

#[derive(Serialize)]
struct PageView<'a> {
    status: &'a str,
    email: &'a str,
    password: &'a str,
    modes: Vec<ModeOption>,
    query_label: &'static str,
    query: &'a str,
    top_k: u32,
    min_top_k: u32,
    max_top_k: u32,
    user_id: Option<i64>,
    polling: bool,
    job_id: Option<&'a str>,
    polls: u32,
    recommendations: Vec<RecommendationRow<'a>>,
}

impl<'a> PageView<'a> {
    fn new(state: &'a UiState) -> Self {
        let form = &state.recommend_form;
        Self {
            status: &state.status,
            email: &state.login_form.email,
            password: prefilled_password(&state.login_form.password),
            modes: Mode::ALL
                .iter()
                .map(|mode| ModeOption {
                    value: mode.as_str(),
                    label: mode.label(),
                    selected: *mode == form.mode,
                })
                .collect(),
            query_label: form.mode.query_label(),
            query: &form.query,
            top_k: form.top_k,
            min_top_k: MIN_TOP_K,
            max_top_k: MAX_TOP_K,
            user_id: state.session.user_id().filter(|_| state.session.is_authenticated()),
            polling: state.is_polling(),
            job_id: state.job.as_ref().map(|job| job.job_id.as_str()),
            polls: state.job.as_ref().map_or(0, |job| job.polls),
            recommendations: state
                .recommendations
                .iter()
                .enumerate()
                .map(|(index, item)| RecommendationRow {
                    rank: index + 1,
                    movie_id: item.movie_id,
                    title: &item.title,
                    score: format_score(item.score),
                    reason: &item.reason,
                })
                .collect(),
        }
    }
}

/// Only the built-in demo password is written back into the page; anything
/// a user typed stays server-side.
fn prefilled_password(password: &str) -> &'static str {
    if password == DEFAULT_PASSWORD {
        DEFAULT_PASSWORD
    } else {
        ""
    }
}

/// Scores are always shown with exactly three decimals
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            INDEX_TEMPLATE,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html")),
        )?;
        Ok(Self { tera })
    }

    pub fn render(&self, state: &UiState) -> Result<String, tera::Error> {
        let ctx = Context::from_serialize(PageView::new(state))?;
        self.tera.render(INDEX_TEMPLATE, &ctx)
    }
}

//! HTTP routes: the form page, article and preview generation, and the Slack echo.

use crate::ai::ArticleService;
use crate::Error;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const INDEX_PAGE: &str = include_str!("../templates/index.html");

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleService>,
}

impl AppState {
    pub fn new(articles: Arc<dyn ArticleService>) -> Self {
        Self { articles }
    }
}

/// Urlencoded query or form values, first value per key.
///
/// Parsing never fails: undecodable input and missing keys read as empty strings.
#[derive(Debug, Default)]
pub struct Fields(HashMap<String, String>);

impl Fields {
    pub fn parse(input: &[u8]) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(input).unwrap_or_default();

        let mut fields = HashMap::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(value);
        }
        Self(fields)
    }

    pub fn from_query(query: Option<&str>) -> Self {
        Self::parse(query.unwrap_or_default().as_bytes())
    }

    /// Body fields of a urlencoded POST. Any other content type has no fields.
    pub fn from_form(headers: &HeaderMap, body: &[u8]) -> Self {
        let is_form = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE));

        if is_form {
            Self::parse(body)
        } else {
            Self::default()
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }
}

/// Any generation failure. The cause is logged; callers only see a generic 500.
#[derive(Debug)]
pub struct GenerationFailed(pub Error);

impl From<Error> for GenerationFailed {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for GenerationFailed {
    fn into_response(self) -> Response {
        tracing::error!("Error generating article: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error generating article").into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", get(generate_article))
        .route("/generate-api", post(generate_preview))
        .route("/slack", post(slack_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Model output is trusted and returned unescaped.
async fn generate_article(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, GenerationFailed> {
    let fields = Fields::from_query(query.as_deref());
    let article = state.articles.generate_article(fields.get("prompt")).await?;
    Ok(Html(article))
}

async fn generate_preview(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, GenerationFailed> {
    let fields = Fields::from_form(&headers, &body);
    let title = fields.get("text");
    let preview = state.articles.generate_preview(title).await?;
    Ok(format!("*{}:* {}", title, preview))
}

// TODO: verify X-Slack-Signature against a signing secret before this does real work.
async fn slack_command(headers: HeaderMap, body: Bytes) -> String {
    let fields = Fields::from_form(&headers, &body);
    format!("{} ~ {} ~ {}", fields.get("text"), fields.get("command"), fields.get("user_id"))
}

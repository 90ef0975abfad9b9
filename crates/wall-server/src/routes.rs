use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wall_core::search::filter_messages;
use wall_core::Message;
use wall_stats::aggregations::{aggregate, snippet, AuthorCount, DateCount};
use wall_stats::daily::pick_daily;
use wall_stats::ChartSeries;

// ── Health ──────────────────────────────────────────────────────────────

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ── Wall page ───────────────────────────────────────────────────────────

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(wall_page))
}

async fn wall_page() -> impl IntoResponse {
    Html(include_str!("../assets/index.html"))
}

// ── Messages ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

pub fn message_routes() -> Router<AppState> {
    Router::new().route("/api/messages", get(list_messages))
}

/// List messages, optionally filtered by `?q=`.
///
/// The response is a display copy in newest-first order; the underlying
/// store keeps insertion order.
async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let mut view: Vec<Message> = filter_messages(state.store.messages(), &query)
        .into_iter()
        .cloned()
        .collect();
    view.reverse();
    Json(view)
}

// ── Stats ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct LongestView {
    message: Message,
    length: usize,
    snippet: String,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    total: usize,
    by_date: Vec<DateCount>,
    by_author: Vec<AuthorCount>,
    longest: Option<LongestView>,
    chart: ChartSeries,
}

pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/api/stats", get(stats))
}

/// Aggregate statistics, recomputed per request over the (optionally
/// filtered) message list.
async fn stats(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let filtered: Vec<Message> = filter_messages(state.store.messages(), &query)
        .into_iter()
        .cloned()
        .collect();
    let snapshot = aggregate(&filtered);
    let chart = ChartSeries::from_snapshot(&snapshot);
    let longest = snapshot.longest.clone().map(|message| LongestView {
        length: message.text.chars().count(),
        snippet: snippet(&message.text),
        message,
    });
    Json(StatsResponse {
        total: snapshot.total,
        by_date: snapshot.by_date,
        by_author: snapshot.by_author,
        longest,
        chart,
    })
}

// ── Daily pick ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    /// Override the pick date (`YYYY-MM-DD`). Defaults to today.
    #[serde(default)]
    date: Option<String>,
}

pub fn daily_routes() -> Router<AppState> {
    Router::new().route("/api/daily", get(daily))
}

/// The message of the day. Date-based only; search filtering never
/// changes the pick.
async fn daily(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let date = match params.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid date: {}", e)))?,
        None => chrono::Utc::now().date_naive(),
    };

    match pick_daily(state.store.messages(), date) {
        Some(pick) => Ok(Json(pick)),
        None => Err((StatusCode::NOT_FOUND, "no messages on the wall".into())),
    }
}

// ── Palette ─────────────────────────────────────────────────────────────

pub fn palette_routes() -> Router<AppState> {
    Router::new().route("/api/palette", get(palette))
}

async fn palette(State(state): State<AppState>) -> impl IntoResponse {
    let colors: Vec<String> = state.palette.iter().map(|c| c.to_css()).collect();
    Json(colors)
}

// ── Share URLs ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShareParams {
    text: Option<String>,
}

pub fn share_routes() -> Router<AppState> {
    Router::new().route("/api/share", get(share))
}

/// Build the URL encoded into a share QR code. The page renders the QR
/// itself; this endpoint only assembles the link.
async fn share(
    State(state): State<AppState>,
    Query(params): Query<ShareParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let text = params
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "missing text parameter".into()))?;

    let base = format!(
        "http://{}:{}/",
        state.config.server.host, state.config.server.port
    );
    let mut link = url::Url::parse(&base)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    link.set_fragment(Some(&format!("hack={}", encoded)));

    Ok(Json(serde_json::json!({ "url": link.to_string() })))
}

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::dashboard::{Dashboard, NavEntry, Page};
use crate::reports::{FilterOptions, SeriesSummary};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::metrics::{metrics_handler, record_page_view};
use super::{http_cache, log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct Navigation<'a> {
    title: &'a str,
    footnote: Option<&'a str>,
    pages: Vec<NavEntry>,
}

#[derive(Serialize)]
struct SummaryResponse<'a> {
    #[serde(flatten)]
    summary: &'a SeriesSummary,
    headline: String,
}

#[derive(Deserialize, Debug)]
struct RouteQuery {
    pub path: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn get_navigation(State(dashboard): State<GuardedDashboard>) -> Response {
    Json(Navigation {
        title: dashboard.title(),
        footnote: dashboard.footnote(),
        pages: dashboard.navigation(),
    })
    .into_response()
}

fn page_response(page: Option<&Page>) -> Response {
    match page {
        Some(page) => {
            record_page_view(page.key.as_str());
            Json(page).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404").into_response(),
    }
}

async fn get_page(State(dashboard): State<GuardedDashboard>, Path(key): Path<String>) -> Response {
    page_response(dashboard.page_by_key(&key))
}

async fn route_page(
    State(dashboard): State<GuardedDashboard>,
    Query(query): Query<RouteQuery>,
) -> Response {
    page_response(dashboard.resolve(&query.path))
}

async fn get_summary(State(dashboard): State<GuardedDashboard>) -> Response {
    Json(SummaryResponse {
        summary: dashboard.summary(),
        headline: dashboard.summary().headline(dashboard.subject()),
    })
    .into_response()
}

async fn get_filters(State(dashboard): State<GuardedDashboard>) -> Json<FilterOptions> {
    Json(dashboard.filters().clone())
}

pub fn make_app(config: ServerConfig, dashboard: Arc<Dashboard>) -> Result<Router> {
    let state = ServerState::new(config.clone(), dashboard);

    let page_routes: Router = Router::new()
        .route("/pages", get(get_navigation))
        .route("/pages/{key}", get(get_page))
        .route("/route", get(route_page))
        .route("/summary", get(get_summary))
        .route("/filters", get(get_filters))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let mut app: Router = home_router.nest("/v1", page_routes);
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

pub async fn run_server(dashboard: Arc<Dashboard>, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let metrics_port = config.metrics_port;
    let app = make_app(config, dashboard)?;

    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}", metrics_port))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server stopped: {}", err);
        }
    });
    info!("Metrics available at port {}!", metrics_port);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Ready to serve at port {}!", port);

    Ok(axum::serve(listener, app).await?)
}

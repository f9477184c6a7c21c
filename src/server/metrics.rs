use crate::dataset::{Dataset, SheetName};
use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all dashboard metrics
const PREFIX: &str = "art_dashboard";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    pub static ref PAGE_VIEWS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_page_views_total"), "Dashboard pages served"),
        &["page"]
    ).expect("Failed to create page_views_total metric");

    // Dataset Metrics
    pub static ref DATASET_ROWS_TOTAL: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_dataset_rows_total"), "Rows loaded per workbook sheet"),
        &["sheet"]
    ).expect("Failed to create dataset_rows_total metric");

    pub static ref DATASET_PROBLEMS_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_dataset_problems_total"),
        "Non-fatal reference problems found while loading the workbook"
    ).expect("Failed to create dataset_problems_total metric");

    pub static ref UNMATCHED_ARTISTS_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_unmatched_artists_total"),
        "Charted artists missing from the Bands sheet"
    ).expect("Failed to create unmatched_artists_total metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(PAGE_VIEWS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(DATASET_ROWS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(DATASET_PROBLEMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(UNMATCHED_ARTISTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROCESS_MEMORY_BYTES.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize dataset-specific metrics
pub fn init_dataset_metrics(dataset: &Dataset, unmatched_artists: usize) {
    for sheet in SheetName::ALL {
        DATASET_ROWS_TOTAL
            .with_label_values(&[sheet.as_str()])
            .set(dataset.rows_count(sheet) as f64);
    }
    DATASET_PROBLEMS_TOTAL.set(dataset.problems().len() as f64);
    UNMATCHED_ARTISTS_TOTAL.set(unmatched_artists as f64);

    tracing::info!(
        "Dataset metrics initialized: {} shows, {} performances, {} songs",
        dataset.rows_count(SheetName::Gigs),
        dataset.rows_count(SheetName::Performances),
        dataset.rows_count(SheetName::Songs),
    );
}

/// Maps a request path onto the route it was served by.
pub fn categorize_endpoint(path: &str) -> &'static str {
    match path {
        "/" => "/",
        "/v1/pages" => "/v1/pages",
        "/v1/route" => "/v1/route",
        "/v1/summary" => "/v1/summary",
        "/v1/filters" => "/v1/filters",
        p if p.starts_with("/v1/pages/") => "/v1/pages/{key}",
        _ => "other",
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a dashboard page being served
pub fn record_page_view(page: &str) {
    PAGE_VIEWS_TOTAL.with_label_values(&[page]).inc();
}

/// Update process memory usage
pub fn update_memory_usage() {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            let rss_kb = status
                .lines()
                .find(|line| line.starts_with("VmRSS:"))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse::<f64>().ok());
            if let Some(kb) = rss_kb {
                PROCESS_MEMORY_BYTES.set(kb * 1024.0);
            }
        }
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    update_memory_usage();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}

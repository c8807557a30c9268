use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may read the reports; the download filename header is exposed
/// so browsers can save the workbook under its proper name.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any)
        .expose_headers([header::CONTENT_DISPOSITION])
}

use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
pub mod health;

/// # Domain Classification Endpoints
///
/// Classifies domains as disposable, free, or business and validates
/// work email addresses, using the embedded provider tables.
///
/// ## Mounted Endpoints
/// - `POST /api/v1/classify-domain`
/// - `POST /api/v1/classify-domains-bulk`
/// - `POST /api/v1/validate-work-email`
pub mod domain;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health              - Service health status
/// POST /api/v1/classify-domain     - Single domain classification
/// POST /api/v1/classify-domains-bulk - Bulk domain classification
/// POST /api/v1/validate-work-email - Work email check
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(domain::configure_routes),
    );
}

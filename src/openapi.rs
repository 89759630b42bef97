use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa
/// procedural macros. The spec is generated at compile time from these
/// annotations; changes to the API surface should be reflected here to
/// keep the documentation accurate.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Domain Classification: `POST /api/v1/classify-domain`
/// - Bulk Classification: `POST /api/v1/classify-domains-bulk`
/// - Work Email Validation: `POST /api/v1/validate-work-email`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::domain::classify_domain,
        crate::routes::domain::classify_domains_bulk,
        crate::routes::domain::validate_work_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::classification::DomainRequest,
            crate::models::classification::BulkDomainRequest,
            crate::models::classification::EmailRequest,
            crate::models::classification::DomainClassification,
            crate::models::classification::BulkClassificationResponse,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Domain Classification", description = "Disposable/free/business domain classification endpoints"),
        (name = "Work Email Validation", description = "Business email address checks")
    ),
    info(
        description = "API for classifying email domains as disposable, free, or business, and validating work email addresses",
        title = "Work Email Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

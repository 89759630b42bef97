/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
pub mod health;

/// Request and response payloads for the domain-classification and
/// work-email endpoints.
pub mod classification;

pub use classification::{
    BulkClassificationResponse, BulkDomainRequest, DomainClassification, DomainRequest,
    EmailRequest,
};
pub use health::HealthResponse;

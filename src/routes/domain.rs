use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::models::{
    BulkClassificationResponse, BulkDomainRequest, DomainClassification, DomainRequest,
    EmailRequest,
};
use crate::validation::classify;

/// # Domain Classification Endpoint
///
/// Classifies a domain as disposable, free, or business against the
/// embedded provider tables. Subdomains of listed providers match their
/// parent entry; internationalized domains are compared in their ASCII
/// (Punycode) form.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `domain` field
///
/// ## Responses
/// - **200 OK**: Classification result for the domain. Syntactically
///   invalid input is not an error; it simply classifies with all flags
///   false.
///
/// ## Example Request
/// ```json
/// { "domain": "gmail.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/classify-domain",
    request_body = DomainRequest,
    responses(
        (status = 200, description = "Domain classification result", body = DomainClassification),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Domain Classification"
)]
#[post("/classify-domain")]
pub async fn classify_domain(
    req: web::Json<DomainRequest>,
) -> Result<impl Responder, actix_web::Error> {
    Ok(HttpResponse::Ok().json(DomainClassification::of(&req.domain)))
}

/// # Bulk Domain Classification Endpoint
///
/// Classifies every domain in the request body and returns per-domain
/// results plus business/non-business counts. Classification is a pure
/// in-memory lookup, so the batch is processed synchronously.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `domains` array field
///
/// ## Responses
/// - **200 OK**: Returns classification results for all domains with counts
///
/// ## Example Request
/// ```json
/// { "domains": ["gmail.com", "mycompany.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/classify-domains-bulk",
    request_body = BulkDomainRequest,
    responses(
        (status = 200, description = "Bulk classification results", body = BulkClassificationResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Domain Classification"
)]
#[post("/classify-domains-bulk")]
pub async fn classify_domains_bulk(
    req: web::Json<BulkDomainRequest>,
) -> Result<impl Responder, actix_web::Error> {
    let results: Vec<DomainClassification> = req
        .domains
        .iter()
        .map(|domain| DomainClassification::of(domain))
        .collect();

    let business_count = results.iter().filter(|r| r.business).count();
    let non_business_count = results.len() - business_count;

    Ok(HttpResponse::Ok().json(BulkClassificationResponse {
        results,
        business_count,
        non_business_count,
    }))
}

/// # Work Email Validation Endpoint
///
/// Checks whether an email address belongs to a business domain. The
/// domain is taken from after the last `@`; addresses from free or
/// disposable providers, and addresses whose domain fails the syntax
/// check, are not work emails.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: Email is from a business domain
/// - **400 Bad Request**: Email is not a work email (`NOT_WORK_EMAIL`)
///
/// ## Example Request
/// ```json
/// { "email": "contact@mycompany.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-work-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is from a business domain"),
        (status = 400, description = "Email is not a work email")
    ),
    tag = "Work Email Validation"
)]
#[post("/validate-work-email")]
pub async fn validate_work_email(
    req: web::Json<EmailRequest>,
) -> Result<impl Responder, actix_web::Error> {
    if classify::is_work_email(&req.email) {
        Ok(HttpResponse::Ok().json(json!({
            "status": "VALID",
            "is_work_email": true,
            "message": "Email address is from a business domain"
        })))
    } else {
        Ok(HttpResponse::BadRequest().json(json!({
            "error": "NOT_WORK_EMAIL",
            "is_work_email": false,
            "message": "Email address is not from a business domain"
        })))
    }
}

/// Configures domain classification routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(classify_domain)
        .service(classify_domains_bulk)
        .service(validate_work_email);
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::classify;

#[derive(Deserialize, ToSchema)]
pub struct DomainRequest {
    pub domain: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkDomainRequest {
    pub domains: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

/// # Domain Classification Result
///
/// The full classification of a single domain against the embedded
/// tables. `business` is true only for syntactically valid domains that
/// are neither disposable nor free, so all three flags can be false at
/// once (invalid input).
///
/// ## Example JSON
/// ```json
/// {
///   "domain": "gmail.com",
///   "disposable": false,
///   "free": true,
///   "business": false
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct DomainClassification {
    pub domain: String,
    pub disposable: bool,
    pub free: bool,
    pub business: bool,
}

impl DomainClassification {
    /// Classifies a raw domain by running every predicate once.
    pub fn of(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            disposable: classify::is_disposable_domain(domain),
            free: classify::is_free_domain(domain),
            business: classify::is_business_domain(domain),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BulkClassificationResponse {
    pub results: Vec<DomainClassification>,
    pub business_count: usize,
    pub non_business_count: usize,
}

pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;

pub use validation::classify::{
    is_business_domain, is_disposable_domain, is_disposable_or_free_domain, is_free_domain,
    is_work_email,
};

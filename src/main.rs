use actix_web::{App, HttpServer, web::Data};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use work_email_validator::openapi::ApiDoc;
use work_email_validator::validation::tables;

/// Work Email Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Domain classification and work-email endpoints under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - REST API: `/api/v1/...` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `HOST` / `PORT` environment variables (defaults `127.0.0.1:8080`)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Build both lookup tables before accepting traffic.
    tables::disposable_domains();
    tables::free_domains();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .configure(work_email_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}

pub mod generation_handler;
pub mod health_handler;

use actix_web::web;

use crate::errors::AppError;

pub use generation_handler::{download, generate_api, generate_page, index};
pub use health_handler::health_check;

/// Registers every route the server exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(index)
        .service(generate_page)
        .service(download)
        .service(generate_api)
        .service(health_check);
}

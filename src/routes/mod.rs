// Route exports
pub mod compatibility;

pub use compatibility::{AppState, SERVICE_NAME};

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(compatibility::configure);
}

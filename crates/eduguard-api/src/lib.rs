//! EduGuard API Library
//!
//! HTTP handlers, application state and setup for the upload service.

mod api_doc;
mod handlers;
mod telemetry;
mod utils;
mod validation;

pub mod error;
pub mod services;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use services::dashboard::{DashboardFeed, StaticDashboardFeed};
pub use services::upload::UploadPipeline;
pub use state::AppState;

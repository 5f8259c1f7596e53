pub mod dashboard_handlers;
pub mod dashboard_service;

pub use dashboard_handlers::get_dashboard;
pub use dashboard_service::{DashboardSummary, NamedCount};

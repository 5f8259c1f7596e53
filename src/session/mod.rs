pub mod session_handlers;
pub mod session_service;

pub use session_handlers::{get_session, login, logout};
pub use session_service::{SessionService, SessionStatus};

pub mod delivery;
pub mod reminder_scheduler;
pub mod reminder_service;
pub mod schedule;

pub use delivery::{BroadcastNotifier, PermissionState, ReminderNotifier};
pub use reminder_service::{start_reminder_service, ReminderServiceHandle};

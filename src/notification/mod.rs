pub mod notification_dto;
pub mod notification_feed;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_repository;
pub mod notification_service;

pub use notification_dto::{
    MarkAllReadResponse, NotificationClickResponse, NotificationFeedResponse, NotificationResponse, View,
};
pub use notification_handlers::{
    get_notifications, mark_all_notifications_read, mark_notification_read, notification_stream,
};
pub use notification_models::{Notification, NotificationKind, ReminderEvent};
pub use notification_repository::NotificationRepository;
pub use notification_service::NotificationService;

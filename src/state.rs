use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use crate::{
    contact::ContactRepository,
    deal::DealRepository,
    lead::LeadRepository,
    notification::{NotificationRepository, NotificationService, ReminderEvent},
    reminder::{BroadcastNotifier, PermissionState, ReminderNotifier},
    session::SessionService,
    store::CrmStore,
    task::{TaskRepository, TaskService},
};

#[derive(Clone)]
pub struct AppState {
    pub store: CrmStore,
    pub reminder_tx: broadcast::Sender<ReminderEvent>,
    pub lead_repository: LeadRepository,
    pub contact_repository: ContactRepository,
    pub deal_repository: DealRepository,
    pub task_service: TaskService,
    pub notification_service: NotificationService,
    pub session_service: SessionService,
}

impl AppState {
    pub fn new(config: &Config, store: CrmStore) -> Self {
        let (reminder_tx, _) = broadcast::channel(100);
        let notifier: Arc<dyn ReminderNotifier> = Arc::new(BroadcastNotifier::new(
            reminder_tx.clone(),
            config.notification_permission,
            config.grant_on_request,
        ));

        let lead_repository = LeadRepository::new(store.clone());
        let contact_repository = ContactRepository::new(store.clone());
        let deal_repository = DealRepository::new(store.clone());
        let task_service = TaskService::new(TaskRepository::new(store.clone()));
        let notification_service = NotificationService::new(
            store.clone(),
            NotificationRepository::new(store.clone()),
            lead_repository.clone(),
        );
        let session_service = SessionService::new(
            store.clone(),
            notification_service.clone(),
            notifier,
            Duration::from_secs(config.reminder_poll_interval_secs),
        );

        Self {
            store,
            reminder_tx,
            lead_repository,
            contact_repository,
            deal_repository,
            task_service,
            notification_service,
            session_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub reminder_poll_interval_secs: u64,
    pub notification_permission: PermissionState,
    pub grant_on_request: bool,
    pub seed_demo_data: bool,
    pub auto_login: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            reminder_poll_interval_secs: 30,
            notification_permission: PermissionState::Unknown,
            grant_on_request: true,
            seed_demo_data: true,
            auto_login: true,
        }
    }
}

/// Read `key` and parse it, keeping `default` when unset or malformed.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let reminder_poll_interval_secs =
            match env_or("REMINDER_POLL_INTERVAL_SECS", defaults.reminder_poll_interval_secs) {
                0 => {
                    tracing::warn!("REMINDER_POLL_INTERVAL_SECS must be positive, using default");
                    defaults.reminder_poll_interval_secs
                }
                secs => secs,
            };

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            reminder_poll_interval_secs,
            notification_permission: env_or("NOTIFICATION_PERMISSION", defaults.notification_permission),
            grant_on_request: env_or("GRANT_ON_REQUEST", defaults.grant_on_request),
            seed_demo_data: env_or("SEED_DEMO_DATA", defaults.seed_demo_data),
            auto_login: env_or("AUTO_LOGIN", defaults.auto_login),
        }
    }
}

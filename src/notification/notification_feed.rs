use chrono::{DateTime, Duration, Utc};

use super::notification_models::{Notification, NotificationKind};
use crate::{
    deal::deal_models::{Deal, DealStatus},
    lead::lead_models::{Lead, LeadStatus},
    task::task_models::Task,
};

pub const WELCOME_NOTIFICATION_ID: &str = "notif_welcome";

/// Derive the notification feed from the current collections.
///
/// At most one notification per category is emitted, for the first matching
/// record in collection order:
/// - the first open task due on `now`'s calendar date (unread, at `now`)
/// - the first lead with status New (unread, one hour before `now`)
/// - the first deal in Negotiation (read, five hours before `now`)
/// - a welcome entry, always (read, one day before `now`)
///
/// The result is sorted newest first. Identical inputs give identical output.
pub fn build_feed(leads: &[Lead], deals: &[Deal], tasks: &[Task], now: DateTime<Utc>) -> Vec<Notification> {
    let mut feed = Vec::with_capacity(4);
    let today = now.date_naive().format("%Y-%m-%d").to_string();

    if let Some(task) = tasks.iter().find(|t| !t.completed && t.due_date == today) {
        feed.push(Notification {
            id: format!("notif_task_{}", task.id),
            message: format!("Task \"{}\" is due today.", task.title),
            kind: NotificationKind::Task,
            related_id: Some(task.id.clone()),
            read: false,
            timestamp: now,
        });
    }

    if let Some(lead) = leads.iter().find(|l| l.status == LeadStatus::New) {
        feed.push(Notification {
            id: format!("notif_lead_{}", lead.id),
            message: format!("New lead: {} from {}.", lead.name, lead.company),
            kind: NotificationKind::Lead,
            related_id: Some(lead.id.clone()),
            read: false,
            timestamp: now - Duration::hours(1),
        });
    }

    if let Some(deal) = deals.iter().find(|d| d.status == DealStatus::Negotiation) {
        feed.push(Notification {
            id: format!("notif_deal_{}", deal.id),
            message: format!("Deal \"{}\" is in negotiation.", deal.title),
            kind: NotificationKind::Deal,
            related_id: Some(deal.id.clone()),
            read: true,
            timestamp: now - Duration::hours(5),
        });
    }

    feed.push(Notification {
        id: WELCOME_NOTIFICATION_ID.to_string(),
        message: "Welcome to your CRM dashboard!".to_string(),
        kind: NotificationKind::General,
        related_id: None,
        read: true,
        timestamp: now - Duration::days(1),
    });

    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed
}

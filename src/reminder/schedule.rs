use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    error::{AppError, Result},
    task::task_models::Task,
};

/// Time of day used when a task has no due time.
pub const DEFAULT_DUE_TIME: &str = "09:00:00";

pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid due date '{}', expected YYYY-MM-DD", value)))
}

/// Accepts `HH:MM` and `HH:MM:SS` in 24-hour form.
pub fn parse_due_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("Invalid due time '{}', expected HH:MM", value)))
}

/// Wall-clock instant a task falls due. An absent or empty due time means 09:00.
pub fn due_instant(task: &Task) -> Result<NaiveDateTime> {
    let date = parse_due_date(&task.due_date)?;
    let time = match task.due_time.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_DUE_TIME,
    };
    Ok(date.and_time(parse_due_time(time)?))
}

/// Span during which a reminder for `task` may fire: from the reminder
/// instant up to and including the due instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub remind_at: NaiveDateTime,
    pub due_at: NaiveDateTime,
}

impl ReminderWindow {
    pub fn contains(&self, now: NaiveDateTime) -> bool {
        self.remind_at <= now && now <= self.due_at
    }
}

/// `Ok(None)` when the task has no reminder configured.
pub fn reminder_window(task: &Task) -> Result<Option<ReminderWindow>> {
    let Some(lead_time) = task.reminder.lead_time() else {
        return Ok(None);
    };
    let due_at = due_instant(task)?;
    let remind_at = due_at
        .checked_sub_signed(lead_time)
        .ok_or_else(|| AppError::Validation(format!("Due date out of range for task {}", task.id)))?;

    Ok(Some(ReminderWindow { remind_at, due_at }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::task_models::{ReminderOffset, TaskPriority};

    fn task(due_date: &str, due_time: Option<&str>, reminder: ReminderOffset) -> Task {
        Task {
            id: "task_1".to_string(),
            title: "Call back".to_string(),
            due_date: due_date.to_string(),
            due_time: due_time.map(str::to_string),
            completed: false,
            related_to: "General".to_string(),
            priority: TaskPriority::Medium,
            reminder,
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_due_instant_defaults_to_nine() {
        let due = due_instant(&task("2025-09-21", None, ReminderOffset::None)).unwrap();
        assert_eq!(due, at("2025-09-21", "09:00:00"));

        let due = due_instant(&task("2025-09-21", Some(""), ReminderOffset::None)).unwrap();
        assert_eq!(due, at("2025-09-21", "09:00:00"));
    }

    #[test]
    fn test_due_instant_accepts_short_and_long_times() {
        let due = due_instant(&task("2025-09-21", Some("14:30"), ReminderOffset::None)).unwrap();
        assert_eq!(due, at("2025-09-21", "14:30:00"));

        let due = due_instant(&task("2025-09-21", Some("14:30:15"), ReminderOffset::None)).unwrap();
        assert_eq!(due, at("2025-09-21", "14:30:15"));
    }

    #[test]
    fn test_malformed_date_or_time_is_rejected() {
        assert!(due_instant(&task("21/09/2025", None, ReminderOffset::None)).is_err());
        assert!(due_instant(&task("2025-02-30", None, ReminderOffset::None)).is_err());
        assert!(due_instant(&task("2025-09-21", Some("noon"), ReminderOffset::None)).is_err());
        assert!(due_instant(&task("2025-09-21", Some("25:00"), ReminderOffset::None)).is_err());
    }

    #[test]
    fn test_reminder_window_for_each_offset() {
        let due = at("2025-09-21", "10:00:00");
        let cases = [
            (ReminderOffset::FiveMinutes, at("2025-09-21", "09:55:00")),
            (ReminderOffset::FifteenMinutes, at("2025-09-21", "09:45:00")),
            (ReminderOffset::OneHour, at("2025-09-21", "09:00:00")),
            (ReminderOffset::OneDay, at("2025-09-20", "10:00:00")),
        ];

        for (offset, expected) in cases {
            let window = reminder_window(&task("2025-09-21", Some("10:00"), offset))
                .unwrap()
                .unwrap();
            assert_eq!(window.remind_at, expected, "offset {}", offset);
            assert_eq!(window.due_at, due);
        }
    }

    #[test]
    fn test_no_window_without_reminder() {
        let window = reminder_window(&task("2025-09-21", Some("10:00"), ReminderOffset::None)).unwrap();
        assert!(window.is_none());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = reminder_window(&task("2025-09-21", Some("10:00"), ReminderOffset::FifteenMinutes))
            .unwrap()
            .unwrap();

        assert!(window.contains(at("2025-09-21", "09:45:00")));
        assert!(window.contains(at("2025-09-21", "10:00:00")));
        assert!(!window.contains(at("2025-09-21", "09:44:59")));
        assert!(!window.contains(at("2025-09-21", "10:00:01")));
    }
}

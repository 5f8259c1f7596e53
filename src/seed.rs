use chrono::{Duration, NaiveDate};

use crate::{
    contact::contact_models::Contact,
    deal::deal_models::{Deal, DealStatus},
    lead::lead_models::{Lead, LeadNote, LeadSource, LeadStatus},
    store::CrmData,
    task::task_models::{ReminderOffset, Task, TaskPriority},
};

/// Demo pipeline shown on first start. Task due dates are relative to `today`
/// so the reminder poll and the "due today" notification have something to do.
pub fn demo_data(today: NaiveDate) -> CrmData {
    CrmData {
        leads: demo_leads(),
        contacts: demo_contacts(),
        deals: demo_deals(),
        tasks: demo_tasks(today),
        ..CrmData::default()
    }
}

fn note(id: &str, date: &str, text: &str) -> LeadNote {
    LeadNote {
        id: id.to_string(),
        date: date.to_string(),
        note: text.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    status: LeadStatus,
    value: f64,
    last_contact: &str,
    source: LeadSource,
    notes: Vec<LeadNote>,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        status,
        value,
        last_contact: last_contact.to_string(),
        source,
        notes,
    }
}

pub fn demo_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead_001", "John Smith", "Acme Corp", "john@acme.com",
            LeadStatus::Contacted, 5000.0, "2025-09-15", LeadSource::Website,
            vec![
                note("note_1", "2025-09-15", "Initial contact made. Sent introductory email."),
                note("note_2", "2025-09-17", "Followed up via phone call. Scheduled a demo for next week."),
            ],
        ),
        lead(
            "lead_002", "Jane Doe", "Innovate LLC", "jane.d@innovate.com",
            LeadStatus::New, 12000.0, "2025-09-20", LeadSource::Referral,
            vec![note("note_3", "2025-09-20", "Received referral from existing client. High priority.")],
        ),
        lead(
            "lead_003", "Peter Jones", "Solutions Inc.", "peter.j@solutions.com",
            LeadStatus::Qualified, 7500.0, "2025-09-18", LeadSource::ColdCall,
            vec![note("note_4", "2025-09-18", "Completed demo call. Peter is very interested in our premium package.")],
        ),
        lead(
            "lead_004", "Mary Garcia", "Tech Forward", "m.garcia@techfwd.com",
            LeadStatus::Lost, 3000.0, "2025-09-05", LeadSource::Event,
            vec![note("note_5", "2025-09-05", "Met at the tech conference. Followed up, but they chose a competitor.")],
        ),
        lead(
            "lead_005", "David Miller", "Global Solutions", "david@globalsol.com",
            LeadStatus::New, 25000.0, "2025-09-21", LeadSource::Website,
            Vec::new(),
        ),
        lead(
            "lead_006", "Linda Wilson", "Creative Co.", "linda.w@creative.co",
            LeadStatus::Contacted, 8000.0, "2025-09-19", LeadSource::Referral,
            vec![note("note_6", "2025-09-19", "Sent initial outreach email.")],
        ),
    ]
}

fn deal(
    id: &str,
    title: &str,
    contact_name: &str,
    company: &str,
    value: f64,
    status: DealStatus,
    close_date: &str,
) -> Deal {
    Deal {
        id: id.to_string(),
        title: title.to_string(),
        contact_name: contact_name.to_string(),
        company: company.to_string(),
        value,
        status,
        close_date: close_date.to_string(),
    }
}

fn contact(id: &str, name: &str, company: &str, phone: &str, email: &str, tags: &[&str]) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn demo_contacts() -> Vec<Contact> {
    vec![
        contact("contact_001", "John Smith", "Acme Corp", "555-1234", "john@acme.com", &["Client", "Tech"]),
        contact("contact_002", "Jane Doe", "Innovate LLC", "555-5678", "jane.d@innovate.com", &["Lead", "SaaS"]),
        contact(
            "contact_003", "Peter Jones", "Solutions Inc.", "555-8765", "peter.j@solutions.com",
            &["Client", "Consulting"],
        ),
        contact("contact_004", "Sarah Chen", "Data Systems", "555-4321", "sarah.c@datasys.com", &["Partner"]),
    ]
}

pub fn demo_deals() -> Vec<Deal> {
    vec![
        deal("deal_001", "Acme Corp Website Redesign", "John Smith", "Acme Corp", 5000.0, DealStatus::Proposal, "2025-10-15"),
        deal("deal_002", "Innovate LLC SaaS Subscription", "Jane Doe", "Innovate LLC", 12000.0, DealStatus::Negotiation, "2025-11-01"),
        deal("deal_003", "Solutions Inc. Consulting Retainer", "Peter Jones", "Solutions Inc.", 7500.0, DealStatus::ClosedWon, "2025-09-20"),
        deal("deal_004", "Tech Forward Marketing Campaign", "Mary Garcia", "Tech Forward", 3000.0, DealStatus::ClosedLost, "2025-09-10"),
        deal("deal_005", "Global Solutions Cloud Migration", "David Miller", "Global Solutions", 25000.0, DealStatus::New, "2025-12-01"),
        deal("deal_006", "New Project Alpha", "Alex Ray", "StartupX", 15000.0, DealStatus::New, "2025-11-20"),
        deal("deal_007", "Design Overhaul", "Casey Lee", "Creative Co.", 9500.0, DealStatus::Proposal, "2025-10-30"),
    ]
}

pub fn demo_tasks(today: NaiveDate) -> Vec<Task> {
    let day = |offset: i64| (today + Duration::days(offset)).format("%Y-%m-%d").to_string();

    vec![
        Task {
            id: "task_001".to_string(),
            title: "Follow up with John Smith".to_string(),
            due_date: day(1),
            due_time: Some("10:00".to_string()),
            completed: false,
            related_to: "Deal: Acme Corp Website Redesign".to_string(),
            priority: TaskPriority::High,
            reminder: ReminderOffset::OneHour,
        },
        Task {
            id: "task_002".to_string(),
            title: "Prepare proposal for Innovate LLC".to_string(),
            due_date: day(0),
            due_time: Some("14:30".to_string()),
            completed: false,
            related_to: "Deal: Innovate LLC SaaS Subscription".to_string(),
            priority: TaskPriority::High,
            reminder: ReminderOffset::FifteenMinutes,
        },
        Task {
            id: "task_003".to_string(),
            title: "Send invoice to Solutions Inc.".to_string(),
            due_date: day(-2),
            due_time: None,
            completed: true,
            related_to: "Deal: Solutions Inc. Consulting Retainer".to_string(),
            priority: TaskPriority::Low,
            reminder: ReminderOffset::None,
        },
        Task {
            id: "task_004".to_string(),
            title: "Schedule demo with David Miller".to_string(),
            due_date: day(3),
            due_time: None,
            completed: false,
            related_to: "Lead: David Miller".to_string(),
            priority: TaskPriority::Medium,
            reminder: ReminderOffset::OneDay,
        },
        Task {
            id: "task_005".to_string(),
            title: "Research new leads".to_string(),
            due_date: day(5),
            due_time: None,
            completed: false,
            related_to: "General".to_string(),
            priority: TaskPriority::Low,
            reminder: ReminderOffset::None,
        },
    ]
}

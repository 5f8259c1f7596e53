use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    deal::deal_models::DealStatus,
    lead::lead_models::LeadStatus,
    store::CrmData,
};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub deals_in_progress: usize,
    pub new_leads: usize,
    pub tasks_completed: usize,
    pub tasks_pending: usize,
    pub lead_sources: Vec<NamedCount>,
    pub deal_funnel: Vec<NamedCount>,
}

/// Headline figures for the dashboard view.
pub fn summarize(data: &CrmData) -> DashboardSummary {
    let deals_with = |status: DealStatus| data.deals.iter().filter(|d| d.status == status).count();

    // sources in order of first appearance
    let mut lead_sources: Vec<NamedCount> = Vec::new();
    for lead in &data.leads {
        let name = lead.source.to_string();
        match lead_sources.iter_mut().find(|s| s.name == name) {
            Some(entry) => entry.count += 1,
            None => lead_sources.push(NamedCount { name, count: 1 }),
        }
    }

    let tasks_completed = data.tasks.iter().filter(|t| t.completed).count();

    DashboardSummary {
        total_revenue: data
            .deals
            .iter()
            .filter(|d| d.status == DealStatus::ClosedWon)
            .map(|d| d.value)
            .sum(),
        deals_in_progress: deals_with(DealStatus::Negotiation) + deals_with(DealStatus::Proposal),
        new_leads: data.leads.iter().filter(|l| l.status == LeadStatus::New).count(),
        tasks_completed,
        tasks_pending: data.tasks.len() - tasks_completed,
        lead_sources,
        deal_funnel: vec![
            NamedCount { name: "New".to_string(), count: deals_with(DealStatus::New) },
            NamedCount { name: "Proposal".to_string(), count: deals_with(DealStatus::Proposal) },
            NamedCount { name: "Negotiation".to_string(), count: deals_with(DealStatus::Negotiation) },
            NamedCount { name: "Won".to_string(), count: deals_with(DealStatus::ClosedWon) },
        ],
    }
}

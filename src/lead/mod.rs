pub mod lead_dto;
pub mod lead_handlers;
pub mod lead_models;
pub mod lead_repository;

pub use lead_dto::SaveLeadRequest;
pub use lead_handlers::{create_lead, delete_lead, get_lead, get_leads, update_lead};
pub use lead_models::{Lead, LeadNote, LeadSource, LeadStatus};
pub use lead_repository::LeadRepository;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::lead_models::{LeadNote, LeadSource, LeadStatus};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveLeadRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub company: String,
    #[validate(email)]
    pub email: String,
    pub status: LeadStatus,
    #[validate(range(min = 0.0))]
    pub value: f64,
    #[serde(alias = "lastContact")]
    pub last_contact: String,
    pub source: LeadSource,
    #[serde(default)]
    pub notes: Vec<LeadNote>,
}

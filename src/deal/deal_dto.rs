use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::deal_models::DealStatus;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 200))]
    pub contact_name: String,
    #[validate(length(max = 200))]
    pub company: String,
    #[validate(range(min = 0.0))]
    pub value: f64,
    pub status: Option<DealStatus>,
    pub close_date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDealStatusRequest {
    pub status: DealStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DealFilters {
    pub status: Option<DealStatus>,
}

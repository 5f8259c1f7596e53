pub mod deal_dto;
pub mod deal_handlers;
pub mod deal_models;
pub mod deal_repository;

pub use deal_dto::{CreateDealRequest, UpdateDealStatusRequest};
pub use deal_handlers::{create_deal, delete_deal, get_deals, update_deal_status};
pub use deal_models::{Deal, DealStatus};
pub use deal_repository::DealRepository;

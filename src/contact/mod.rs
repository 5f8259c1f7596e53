pub mod contact_dto;
pub mod contact_handlers;
pub mod contact_models;
pub mod contact_repository;

pub use contact_dto::SaveContactRequest;
pub use contact_handlers::{create_contact, delete_contact, get_contact, get_contacts, update_contact};
pub use contact_models::Contact;
pub use contact_repository::ContactRepository;

use super::lead_models::Lead;
use crate::store::CrmStore;

#[derive(Clone)]
pub struct LeadRepository {
    store: CrmStore,
}

impl LeadRepository {
    pub fn new(store: CrmStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Lead> {
        self.store.read().await.leads.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Lead> {
        self.store
            .read()
            .await
            .leads
            .iter()
            .find(|l| l.id == id)
            .cloned()
    }

    /// New leads go to the top of the list.
    pub async fn create(&self, lead: Lead) -> Lead {
        self.store.write().await.leads.insert(0, lead.clone());
        lead
    }

    pub async fn update(&self, lead: Lead) -> Option<Lead> {
        let mut data = self.store.write().await;
        let existing = data.leads.iter_mut().find(|l| l.id == lead.id)?;
        *existing = lead.clone();
        Some(lead)
    }

    pub async fn delete(&self, id: &str) -> u64 {
        let mut data = self.store.write().await;
        let before = data.leads.len();
        data.leads.retain(|l| l.id != id);
        (before - data.leads.len()) as u64
    }
}

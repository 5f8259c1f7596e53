use super::deal_models::{Deal, DealStatus};
use crate::store::CrmStore;

#[derive(Clone)]
pub struct DealRepository {
    store: CrmStore,
}

impl DealRepository {
    pub fn new(store: CrmStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self, status: Option<DealStatus>) -> Vec<Deal> {
        self.store
            .read()
            .await
            .deals
            .iter()
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect()
    }

    pub async fn create(&self, deal: Deal) -> Deal {
        self.store.write().await.deals.push(deal.clone());
        deal
    }

    /// Move a deal to another pipeline stage.
    pub async fn update_status(&self, id: &str, status: DealStatus) -> Option<Deal> {
        let mut data = self.store.write().await;
        let deal = data.deals.iter_mut().find(|d| d.id == id)?;
        deal.status = status;
        Some(deal.clone())
    }

    pub async fn delete(&self, id: &str) -> u64 {
        let mut data = self.store.write().await;
        let before = data.deals.len();
        data.deals.retain(|d| d.id != id);
        (before - data.deals.len()) as u64
    }
}

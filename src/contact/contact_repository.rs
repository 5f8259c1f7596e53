use super::contact_models::Contact;
use crate::store::CrmStore;

#[derive(Clone)]
pub struct ContactRepository {
    store: CrmStore,
}

impl ContactRepository {
    pub fn new(store: CrmStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self, search: Option<&str>) -> Vec<Contact> {
        self.store
            .read()
            .await
            .contacts
            .iter()
            .filter(|c| search.map_or(true, |term| c.matches(term)))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Contact> {
        self.store
            .read()
            .await
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// New contacts go to the top of the list.
    pub async fn create(&self, contact: Contact) -> Contact {
        self.store.write().await.contacts.insert(0, contact.clone());
        contact
    }

    pub async fn update(&self, contact: Contact) -> Option<Contact> {
        let mut data = self.store.write().await;
        let existing = data.contacts.iter_mut().find(|c| c.id == contact.id)?;
        *existing = contact.clone();
        Some(contact)
    }

    pub async fn delete(&self, id: &str) -> u64 {
        let mut data = self.store.write().await;
        let before = data.contacts.len();
        data.contacts.retain(|c| c.id != id);
        (before - data.contacts.len()) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::CrmData;

    fn repo() -> ContactRepository {
        ContactRepository::new(CrmStore::new(CrmData {
            contacts: seed::demo_contacts(),
            ..CrmData::default()
        }))
    }

    #[tokio::test]
    async fn test_search() {
        let repo = repo();

        assert_eq!(repo.find_all(None).await.len(), 4);

        let clients = repo.find_all(Some("client")).await;
        assert_eq!(clients.len(), 2);

        let found = repo.find_all(Some("innovate")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "contact_002");
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let repo = repo();
        let mut contact = seed::demo_contacts()[0].clone();
        contact.id = "contact_100".to_string();

        repo.create(contact.clone()).await;
        assert_eq!(repo.find_all(None).await[0].id, "contact_100");

        contact.phone = "555-0000".to_string();
        assert_eq!(repo.update(contact).await.unwrap().phone, "555-0000");
        assert_eq!(repo.find_by_id("contact_100").await.unwrap().phone, "555-0000");

        assert_eq!(repo.delete("contact_100").await, 1);
        assert_eq!(repo.delete("contact_100").await, 0);

        let mut missing = seed::demo_contacts()[0].clone();
        missing.id = "contact_404".to_string();
        assert!(repo.update(missing).await.is_none());
    }
}

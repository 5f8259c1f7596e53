use super::{task_dto::TaskFilters, task_models::Task};
use crate::{error::Result, store::CrmStore};

#[derive(Clone)]
pub struct TaskRepository {
    store: CrmStore,
}

impl TaskRepository {
    pub fn new(store: CrmStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self, filters: &TaskFilters) -> Vec<Task> {
        let search = filters.search.as_deref().map(str::to_lowercase);

        self.store
            .read()
            .await
            .tasks
            .iter()
            .filter(|t| filters.completed.map_or(true, |c| t.completed == c))
            .filter(|t| filters.priority.map_or(true, |p| t.priority == p))
            .filter(|t| {
                search.as_deref().map_or(true, |term| {
                    t.title.to_lowercase().contains(term) || t.related_to.to_lowercase().contains(term)
                })
            })
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Task> {
        self.store
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn create(&self, task: Task) -> Task {
        self.store.write().await.tasks.insert(0, task.clone());
        task
    }

    /// Apply `change` to the stored task and return the result.
    pub async fn update<F>(&self, id: &str, change: F) -> Option<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut data = self.store.write().await;
        let task = data.tasks.iter_mut().find(|t| t.id == id)?;
        change(task);
        Some(task.clone())
    }

    /// Like [`TaskRepository::update`], but `change` may reject the edit.
    /// The stored task is only replaced when `change` succeeds.
    pub async fn try_update<F>(&self, id: &str, change: F) -> Result<Option<Task>>
    where
        F: FnOnce(&mut Task) -> Result<()>,
    {
        let mut data = self.store.write().await;
        let Some(task) = data.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        let mut edited = task.clone();
        change(&mut edited)?;
        *task = edited.clone();
        Ok(Some(edited))
    }

    pub async fn delete(&self, id: &str) -> u64 {
        let mut data = self.store.write().await;
        let before = data.tasks.len();
        data.tasks.retain(|t| t.id != id);
        (before - data.tasks.len()) as u64
    }
}

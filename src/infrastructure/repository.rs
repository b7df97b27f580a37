//! 内存存储
//!
//! Each resource owns one ordered collection. Handlers only see the
//! [`Repository`] trait, so tests can inject their own seed data.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::lookup::Located;

/// Anything stored in a repository is addressed by a string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Whole collection, in insertion order.
    async fn list(&self) -> Vec<T>;

    async fn get(&self, id: &str) -> Option<T>;

    /// Index of the first element carrying `id`.
    async fn position(&self, id: &str) -> Option<usize>;

    async fn insert(&self, item: T) -> T;

    /// Replaces the element at `slot`. Returns `None` if the slot no longer
    /// holds `slot.id`.
    async fn replace(&self, slot: &Located, item: T) -> Option<T>;

    /// Removes the element at `slot`, with the same staleness check as
    /// [`Repository::replace`].
    async fn remove(&self, slot: &Located) -> Option<T>;

    async fn count(&self) -> usize;
}

pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn holds<T: Entity>(items: &[T], slot: &Located) -> bool {
    items
        .get(slot.index)
        .map(|item| item.id() == slot.id)
        .unwrap_or(false)
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<T> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    async fn position(&self, id: &str) -> Option<usize> {
        self.items.read().await.iter().position(|item| item.id() == id)
    }

    async fn insert(&self, item: T) -> T {
        self.items.write().await.push(item.clone());
        item
    }

    async fn replace(&self, slot: &Located, item: T) -> Option<T> {
        let mut items = self.items.write().await;
        if !holds(&items, slot) {
            return None;
        }
        items[slot.index] = item.clone();
        Some(item)
    }

    async fn remove(&self, slot: &Located) -> Option<T> {
        let mut items = self.items.write().await;
        if !holds(&items, slot) {
            return None;
        }
        Some(items.remove(slot.index))
    }

    async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}

//! 分类业务服务

use std::sync::Arc;

use tracing::{debug, info};

use super::model::{Category, CategoryPayload};
use crate::app::product::{model::Product, service::ProductService};
use crate::core::{error::CoreError, lookup::locate, validation::check_id};
use crate::infrastructure::{id::generate_id, repository::Repository};

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn Repository<Category>>,
    products: ProductService,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn Repository<Category>>, products: ProductService) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub async fn list_categories(&self) -> Vec<Category> {
        self.categories.list().await
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, CoreError> {
        check_id(id)?;
        self.categories.get(id).await.ok_or_else(|| {
            debug!(id, "category not found");
            CoreError::not_found("Category not found")
        })
    }

    /// Products filed under the category. An empty list is only an error
    /// when the category itself is unknown.
    pub async fn category_products(&self, id: &str) -> Result<Vec<Product>, CoreError> {
        check_id(id)?;

        let products = self.products.products_in_category(id).await;
        if products.is_empty() && self.categories.get(id).await.is_none() {
            debug!(id, "category not found");
            return Err(CoreError::not_found("Category not found"));
        }
        Ok(products)
    }

    /// No name check on create.
    pub async fn create_category(&self, payload: CategoryPayload) -> Category {
        let category = self
            .categories
            .insert(payload.into_category(generate_id()))
            .await;
        info!("Created category: {:?} ({})", category.name, category.id);
        category
    }

    pub async fn update_category(
        &self,
        id: &str,
        payload: CategoryPayload,
    ) -> Result<Category, CoreError> {
        check_id(id)?;
        let slot = locate(self.categories.as_ref(), id).await?;

        let category = payload.into_category(slot.id.clone());
        let category = self
            .categories
            .replace(&slot, category)
            .await
            .ok_or_else(|| CoreError::not_found("Not Found"))?;
        info!("Updated category: {:?} ({})", category.name, category.id);
        Ok(category)
    }

    /// Products keep their `categoryId`; nothing cascades.
    pub async fn delete_category(&self, id: &str) -> Result<(), CoreError> {
        check_id(id)?;
        let slot = locate(self.categories.as_ref(), id).await?;

        self.categories
            .remove(&slot)
            .await
            .ok_or_else(|| CoreError::not_found("Not Found"))?;
        info!("Deleted category: {}", id);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.categories.count().await
    }
}

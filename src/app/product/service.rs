//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};

use super::model::{Product, ProductPayload};
use crate::core::{
    error::CoreError,
    lookup::locate,
    validation::{check_id, check_id_and_name, check_name},
};
use crate::infrastructure::{id::generate_id, repository::Repository};

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(products: Arc<dyn Repository<Product>>) -> Self {
        Self { products }
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.products.list().await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, CoreError> {
        check_id(id)?;
        self.products.get(id).await.ok_or_else(|| {
            debug!(id, "product not found");
            CoreError::not_found("Product not found")
        })
    }

    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, CoreError> {
        check_name(payload.name.as_deref())?;

        let product = self.products.insert(payload.into_product(generate_id())).await;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// Full replace; the stored id is always the one in the path.
    pub async fn update_product(
        &self,
        id: &str,
        payload: ProductPayload,
    ) -> Result<Product, CoreError> {
        check_id_and_name(id, payload.name.as_deref())?;
        let slot = locate(self.products.as_ref(), id).await?;

        let product = payload.into_product(slot.id.clone());
        let product = self
            .products
            .replace(&slot, product)
            .await
            .ok_or_else(|| CoreError::not_found("Not Found"))?;
        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), CoreError> {
        check_id(id)?;
        let slot = locate(self.products.as_ref(), id).await?;

        self.products
            .remove(&slot)
            .await
            .ok_or_else(|| CoreError::not_found("Not Found"))?;
        info!("Deleted product: {}", id);
        Ok(())
    }

    /// Products whose `categoryId` equals `category_id`. Does not check that
    /// the category exists.
    pub async fn products_in_category(&self, category_id: &str) -> Vec<Product> {
        self.products
            .list()
            .await
            .into_iter()
            .filter(|p| p.category_id.as_deref() == Some(category_id))
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.products.count().await
    }
}

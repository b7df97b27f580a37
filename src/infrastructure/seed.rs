//! 启动时的种子数据
//!
//! Both collections are compiled into the binary from `data/`.

use crate::app::{category::model::Category, product::model::Product};

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");

pub fn products() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(PRODUCTS_JSON)
}

pub fn categories() -> Result<Vec<Category>, serde_json::Error> {
    serde_json::from_str(CATEGORIES_JSON)
}

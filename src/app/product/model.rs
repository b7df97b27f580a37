//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::infrastructure::repository::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Descriptive fields (price, item number, ...) kept as sent.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 创建/更新产品请求
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductPayload {
    /// Builds the stored product. Any `id` in the body is dropped in favour
    /// of the server-side one.
    pub fn into_product(mut self, id: String) -> Product {
        self.attributes.remove("id");
        Product {
            id,
            name: self.name.unwrap_or_default(),
            category_id: self.category_id,
            attributes: self.attributes,
        }
    }
}

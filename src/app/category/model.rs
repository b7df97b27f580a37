//! 分类数据模型

use serde::{Deserialize, Serialize};

use crate::infrastructure::repository::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Absent when the client never sent one; categories have no name check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 创建/更新分类请求
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryPayload {
    pub fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}

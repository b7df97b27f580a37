//! 按 id 定位集合中的元素

use tracing::debug;

use super::error::CoreError;
use crate::infrastructure::repository::{Entity, Repository};

/// Position of a matched element, handed to `replace`/`remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub index: usize,
    pub id: String,
}

/// Finds the first element whose id equals `id`.
///
/// A miss stops the request with `NotFound("Not Found")`.
pub async fn locate<T: Entity>(
    repository: &dyn Repository<T>,
    id: &str,
) -> Result<Located, CoreError> {
    match repository.position(id).await {
        Some(index) => Ok(Located {
            index,
            id: id.to_string(),
        }),
        None => {
            debug!(id, "lookup miss");
            Err(CoreError::not_found("Not Found"))
        }
    }
}

//! 核心层：错误处理、校验、查找与中间件

pub mod error;
pub mod extract;
pub mod lookup;
pub mod middleware;
pub mod validation;

//! # 产品目录服务
//!
//! 一个基于 Axum 的内存 CRUD 服务，提供产品与分类两种资源：
//! - `app`: 路由、处理器与业务服务
//! - `core`: 错误响应、请求校验、按 id 查找、中间件
//! - `infrastructure`: 内存存储、种子数据、id 生成、日志
//! - `config`: 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_router, AppState};
pub use config::Config;
pub use crate::core::error::CoreError;

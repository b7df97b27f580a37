//! 基础设施层：存储、种子数据、id 生成与日志

pub mod id;
pub mod logger;
pub mod repository;
pub mod seed;

//! 日志基础设施

use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// `RUST_LOG` wins over `level` when set. Safe to call more than once.
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    }
}

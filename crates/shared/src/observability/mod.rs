//! 统一可观测性模块
//!
//! 提供日志的统一初始化入口。
//! 所有二进制通过单一入口点配置日志，确保一致的字段命名和输出格式。

pub mod tracing;

use ::tracing::debug;
use anyhow::Result;

pub use crate::config::ObservabilityConfig;

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use roster_shared::config::RosterConfig;
/// use roster_shared::observability;
///
/// fn main() -> anyhow::Result<()> {
///     let config = RosterConfig::load()?;
///     observability::init(&config.observability)?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;

    debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(())
}

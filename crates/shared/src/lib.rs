//! 共享库
//!
//! 包含名册生成工具共用的配置、错误处理、日志初始化等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;

pub use error::{Result, RosterError};

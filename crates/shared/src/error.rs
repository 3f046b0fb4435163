//! 统一错误处理模块
//!
//! 定义名册生成过程中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 生成过程不做任何重试，任何错误都会终止本次运行。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum RosterError {
    // ==================== 输出错误 ====================
    #[error("文件读写错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 写入错误: {0}")]
    Csv(#[from] csv::Error),

    // ==================== 生成错误 ====================
    #[error("无效的权重向量: {0}")]
    InvalidWeights(String),

    #[error("无效的出生日期: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("姓名语料不可用: {0}")]
    NameCorpus(String),

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, RosterError>;

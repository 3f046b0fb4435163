//! CLI 模块
//!
//! 提供命令行接口。所有参数均为可选，不带参数时使用配置文件、
//! 环境变量或内置默认值。
//!
//! # 使用示例
//!
//! ```bash
//! # 在当前目录生成 contacts.csv
//! contact-generator
//!
//! # 指定输出路径和种子
//! contact-generator -o data/contacts.csv -s 42
//! ```

pub mod commands;
pub mod runner;

pub use commands::Cli;
pub use runner::CommandRunner;

/// 生成成功后输出到 stdout 的确认信息
pub const SUCCESS_MESSAGE: &str = "Program Ran Correctly...";

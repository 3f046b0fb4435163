//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 不带任何参数运行时，在当前目录生成 contacts.csv。

use std::path::PathBuf;

use clap::Parser;

/// 联系人名册生成工具
///
/// 生成 50 条虚构联系人记录，用于测试和演示。
/// 命令行参数优先于配置文件和环境变量。
#[derive(Parser, Debug)]
#[command(name = "contact-generator")]
#[command(version, about = "虚构联系人名册生成工具")]
pub struct Cli {
    /// 输出文件路径（默认 contacts.csv）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 随机数种子，指定后生成结果可复现
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 输出 JSON 格式日志
    #[arg(long)]
    pub json_logs: bool,
}

// ============================================================================
// 单元测试
// ============================================================================

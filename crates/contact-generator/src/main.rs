//! Contact Generator CLI
//!
//! 名册生成工具的命令行入口点。
//! 加载配置、初始化日志、生成 contacts.csv，成功后输出确认信息。

use anyhow::Context;
use clap::Parser;
use contact_generator::cli::{Cli, CommandRunner, SUCCESS_MESSAGE};
use roster_shared::config::RosterConfig;
use roster_shared::observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 配置优先级：命令行参数 > 环境变量 > 配置文件 > 默认值
    let mut config = RosterConfig::load().context("加载配置失败")?;
    config.apply_overrides(cli.output, cli.seed, cli.log_level, cli.json_logs);

    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config);
    runner.run_generate()?;

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

//! 命令执行器
//!
//! 负责把配置转化为一次完整的名册生成：打开输出文件、逐条生成写入、刷新关闭。

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use roster_shared::config::RosterConfig;

use crate::generators::{GenerationStats, RosterGenerator};
use crate::output::CsvRosterWriter;

/// 命令执行器
///
/// 封装最终生效的配置和生成逻辑，简化 main 函数的复杂度。
pub struct CommandRunner {
    config: RosterConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    /// 执行生成
    ///
    /// 输出文件在生成开始时创建，写入器离开作用域时关闭。
    /// 中途失败会留下被截断的文件，不做清理。
    pub fn run_generate(&self) -> Result<GenerationStats> {
        let path = self.config.output.path.as_path();
        let seed = self.config.generation.seed;

        info!(path = %path.display(), seed = ?seed, "开始生成联系人名册");

        let mut generator = RosterGenerator::new(seed).context("初始化名册生成器失败")?;
        let stats = write_roster_file(&mut generator, path)
            .with_context(|| format!("写入名册文件失败: {}", path.display()))?;

        info!(path = %path.display(), records = stats.total, "名册已输出到文件");
        Ok(stats)
    }
}

fn write_roster_file(
    generator: &mut RosterGenerator,
    path: &Path,
) -> roster_shared::Result<GenerationStats> {
    let mut writer = CsvRosterWriter::create(path)?;
    let stats = generator.write_roster(&mut writer)?;
    writer.finish()?;
    Ok(stats)
}

// ============================================================================
// 单元测试
// ============================================================================

//! 测试环境管理
//!
//! 每个测试拥有独立的临时目录，测试结束时自动清理。

use std::path::{Path, PathBuf};

use anyhow::Result;
use contact_generator::cli::CommandRunner;
use contact_generator::generators::GenerationStats;
use roster_shared::config::{DEFAULT_OUTPUT_PATH, RosterConfig};
use tempfile::TempDir;

use crate::helpers::RosterFile;

/// 测试环境
pub struct TestEnvironment {
    dir: TempDir,
}

impl TestEnvironment {
    pub fn setup() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// 默认输出路径（临时目录下的 contacts.csv）
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_OUTPUT_PATH)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// 执行一次生成，输出到默认路径
    pub fn generate(&self, seed: Option<u64>) -> Result<GenerationStats> {
        self.generate_to(&self.output_path(), seed)
    }

    pub fn generate_to(&self, path: &Path, seed: Option<u64>) -> Result<GenerationStats> {
        let mut config = RosterConfig::default();
        config.apply_overrides(Some(path.to_path_buf()), seed, None, false);
        CommandRunner::new(config).run_generate()
    }

    /// 读取并解析默认输出文件
    pub fn read_output(&self) -> Result<RosterFile> {
        RosterFile::read(&self.output_path())
    }
}

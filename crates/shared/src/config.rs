//! 配置管理模块
//!
//! 支持可选的配置文件加载，环境变量覆盖，以及类型安全的配置访问。
//! 不提供任何配置时，行为与默认值完全一致：写入当前目录下的 contacts.csv。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认输出文件名
pub const DEFAULT_OUTPUT_PATH: &str = "contacts.csv";

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// 生成配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationConfig {
    /// 随机数种子，为空时从操作系统熵源初始化
    pub seed: Option<u64>,
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否启用 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RosterConfig {
    pub output: OutputConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl RosterConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {CONFIG_DIR}/roster.toml（可选，CONFIG_DIR 默认为 config）
    /// 3. 环境变量（ROSTER_ 前缀，双下划线分隔层级，如 ROSTER_OUTPUT__PATH -> output.path）
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("output.path", DEFAULT_OUTPUT_PATH)?
            .set_default(
                "observability.log_level",
                defaults.observability.log_level.clone(),
            )?
            .set_default("observability.json_logs", defaults.observability.json_logs)?
            .add_source(File::from(config_dir.join("roster.toml")).required(false))
            // 环境变量覆盖（ROSTER_GENERATION__SEED -> generation.seed）
            .add_source(
                Environment::with_prefix("ROSTER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 使用命令行参数覆盖配置
    ///
    /// 仅覆盖显式提供的参数，未提供的保持配置文件或环境变量中的值
    pub fn apply_overrides(
        &mut self,
        output: Option<PathBuf>,
        seed: Option<u64>,
        log_level: Option<String>,
        json_logs: bool,
    ) {
        if let Some(path) = output {
            self.output.path = path;
        }
        if seed.is_some() {
            self.generation.seed = seed;
        }
        if let Some(level) = log_level {
            self.observability.log_level = level;
        }
        if json_logs {
            self.observability.json_logs = true;
        }
    }
}

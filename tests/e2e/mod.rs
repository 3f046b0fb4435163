//! 名册生成端到端测试
//!
//! 测试覆盖完整的生成流程，包括：
//! - 输出文件结构（表头、行数、字段数）
//! - 序号与状态分段
//! - 出生日期、种族、性别取值范围
//! - 种子复现与文件覆盖

pub mod helpers;
pub mod setup;
pub mod suites;

pub use setup::TestEnvironment;

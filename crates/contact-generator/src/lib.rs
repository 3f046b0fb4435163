//! Contact Generator
//!
//! 生成虚构联系人名册的 crate，用于测试和演示环境。
//!
//! # 主要模块
//!
//! - `models`: 联系人记录、种族、性别、状态分段
//! - `generators`: 人口属性抽样、姓名来源、名册生成器
//! - `output`: CSV 写入器
//! - `cli`: 命令行接口
//!
//! # 使用示例
//!
//! ```rust
//! use contact_generator::generators::RosterGenerator;
//! use contact_generator::output::CsvRosterWriter;
//!
//! // 指定种子，结果可复现
//! let mut generator = RosterGenerator::new(Some(42)).unwrap();
//! let mut writer = CsvRosterWriter::new(Vec::new()).unwrap();
//!
//! let stats = generator.write_roster(&mut writer).unwrap();
//! assert_eq!(stats.total, 50);
//!
//! let csv = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert_eq!(csv.lines().count(), 51);
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod output;

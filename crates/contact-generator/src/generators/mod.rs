//! 生成器模块
//!
//! 提供联系人名册的逐条生成功能。

pub mod data_generator;
pub mod demographics;
pub mod names;

pub use data_generator::{GenerationStats, RosterGenerator};
pub use demographics::{CategoricalSampler, Demographics};
pub use names::{FakerNames, NameList, NameSource};

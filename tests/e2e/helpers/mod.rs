//! 测试辅助工具

pub mod assertions;

pub use roster_file::{RosterFile, RosterRow};

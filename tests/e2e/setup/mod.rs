//! 测试环境

pub mod environment;

pub use environment::TestEnvironment;

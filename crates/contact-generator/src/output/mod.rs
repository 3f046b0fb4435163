//! 输出模块

pub mod csv_writer;

pub use csv_writer::CsvRosterWriter;

//! CSV 输出
//!
//! 字段不加引号、不转义，以逗号分隔、换行结尾。
//! 写入器独占底层句柄，离开作用域时（包括错误返回）自动关闭文件。

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use roster_shared::{Result, RosterError};

use crate::models::{CSV_HEADER, ContactRecord};

/// 名册 CSV 写入器
pub struct CsvRosterWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl CsvRosterWriter<File> {
    /// 创建（或覆盖）输出文件并写入表头
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> CsvRosterWriter<W> {
    /// 包装任意写入目标并写入表头
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);
        inner.write_record(CSV_HEADER)?;

        Ok(Self { inner })
    }

    pub fn write_record(&mut self, record: &ContactRecord) -> Result<()> {
        self.inner.write_record(record.csv_fields())?;
        Ok(())
    }

    /// 刷新缓冲区并交还底层写入目标
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| RosterError::Io(e.into_error()))
    }
}

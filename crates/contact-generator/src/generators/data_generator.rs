//! 名册生成器
//!
//! 按序号逐条生成联系人记录：状态标记由序号决定，其余字段随机抽取。

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use roster_shared::Result;
use tracing::{debug, info};

use crate::generators::demographics::Demographics;
use crate::generators::names::{FakerNames, NameSource};
use crate::models::{ContactRecord, ContactStatus, ROSTER_SIZE};
use crate::output::CsvRosterWriter;

/// 名册生成器
///
/// 持有姓名来源、人口属性抽样器和随机数生成器。
/// 指定种子时整份名册（包括姓名）可以逐字节复现。
pub struct RosterGenerator<N = FakerNames> {
    names: N,
    demographics: Demographics,
    rng: StdRng,
}

impl RosterGenerator<FakerNames> {
    /// 使用默认姓名库创建生成器
    pub fn new(seed: Option<u64>) -> Result<Self> {
        Self::with_names(FakerNames, seed)
    }
}

impl<N: NameSource> RosterGenerator<N> {
    /// 使用指定姓名来源创建生成器
    pub fn with_names(names: N, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            names,
            demographics: Demographics::new()?,
            rng,
        })
    }

    /// 生成指定序号的记录
    pub fn generate_record(&mut self, index: usize) -> Result<ContactRecord> {
        let status = ContactStatus::for_index(index);

        let first_name = self.names.first_name(&mut self.rng);
        let middle_name = self.names.first_name(&mut self.rng);
        let last_name = self.names.last_name(&mut self.rng);
        let race = self.demographics.generate_race(&mut self.rng);
        let date_of_birth = self
            .demographics
            .generate_dob(&mut self.rng, status.is_at_risk)?;
        let sex = self.demographics.generate_sex(&mut self.rng, status.is_at_risk);

        Ok(ContactRecord {
            contact_id: index,
            first_name,
            middle_name,
            last_name,
            date_of_birth,
            race,
            sex,
            notes: String::new(),
            status,
        })
    }

    /// 生成完整名册
    pub fn generate_roster(&mut self) -> Result<Vec<ContactRecord>> {
        (0..ROSTER_SIZE)
            .map(|index| self.generate_record(index))
            .collect()
    }

    /// 逐条生成并写入
    ///
    /// 每条记录生成后立即写出，不在内存中保留整份名册
    pub fn write_roster<W: Write>(
        &mut self,
        writer: &mut CsvRosterWriter<W>,
    ) -> Result<GenerationStats> {
        let mut stats = GenerationStats::default();

        for index in 0..ROSTER_SIZE {
            let record = self.generate_record(index)?;
            writer.write_record(&record)?;
            debug!(contact_id = record.contact_id, "记录已写入");
            stats.record(&record);
        }

        info!(
            total = stats.total,
            at_risk = stats.at_risk,
            deceased = stats.deceased,
            active = stats.active,
            "名册生成完成"
        );

        Ok(stats)
    }
}

/// 统计生成结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub total: usize,
    pub at_risk: usize,
    pub deceased: usize,
    pub active: usize,
}

impl GenerationStats {
    pub fn record(&mut self, record: &ContactRecord) {
        self.total += 1;
        self.at_risk += usize::from(record.status.is_at_risk);
        self.deceased += usize::from(record.status.is_deceased);
        self.active += usize::from(record.status.is_active);
    }

    /// 从记录列表中收集统计信息
    pub fn from_records(records: &[ContactRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }
}

//! 人口属性抽样
//!
//! 出生日期、种族、性别的随机抽取规则。高风险联系人的年龄分布偏年轻，
//! 性别分布偏男性。

use chrono::NaiveDate;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use roster_shared::{Result, RosterError};

use crate::models::{Race, Sex};

/// 日期不区分月份长度，日固定在 1-28 之间
pub const MAX_BIRTH_DAY: u32 = 28;

/// 高风险联系人的出生年份（不含 1995）
pub const AT_RISK_BIRTH_YEARS: [i32; 10] = [
    1994, 1996, 1997, 1998, 1999, 2000, 2001, 2002, 2003, 2004,
];

/// 普通联系人的出生年份（不含 1995）
pub const GENERAL_BIRTH_YEARS: [i32; 25] = [
    1975, 1976, 1977, 1978, 1979, 1980, 1981, 1982, 1983, 1984, 1985, 1986, 1987, 1988, 1989,
    1990, 1991, 1992, 1993, 1994, 1996, 1997, 1998, 1999, 2000,
];

pub const RACE_WEIGHTS: [(Race, f64); 5] = [
    (Race::Hispanic, 0.60),
    (Race::WhiteNotHispanic, 0.20),
    (Race::Black, 0.10),
    (Race::Asian, 0.07),
    (Race::Other, 0.03),
];

pub const AT_RISK_SEX_WEIGHTS: [(Sex, f64); 2] = [(Sex::Male, 0.60), (Sex::Female, 0.40)];

pub const GENERAL_SEX_WEIGHTS: [(Sex, f64); 2] = [(Sex::Male, 0.50), (Sex::Female, 0.50)];

/// 概率之和允许的误差
const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// 按权重抽取类别
///
/// 权重视为概率，必须非负且总和为 1
#[derive(Debug, Clone)]
pub struct CategoricalSampler<T> {
    labels: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> CategoricalSampler<T> {
    pub fn new(weighted: &[(T, f64)]) -> Result<Self> {
        if weighted.is_empty() {
            return Err(RosterError::InvalidWeights("类别列表为空".to_string()));
        }

        let total: f64 = weighted.iter().map(|(_, weight)| weight).sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(RosterError::InvalidWeights(format!(
                "概率之和必须为 1，实际为 {}",
                total
            )));
        }

        let index = WeightedIndex::new(weighted.iter().map(|(_, weight)| *weight))
            .map_err(|e| RosterError::InvalidWeights(e.to_string()))?;

        Ok(Self {
            labels: weighted.iter().map(|(label, _)| *label).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.labels[self.index.sample(rng)]
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }
}

/// 人口属性抽样器
///
/// 权重在创建时校验一次，之后的抽样不会失败
#[derive(Debug, Clone)]
pub struct Demographics {
    race: CategoricalSampler<Race>,
    at_risk_sex: CategoricalSampler<Sex>,
    general_sex: CategoricalSampler<Sex>,
}

impl Demographics {
    pub fn new() -> Result<Self> {
        Ok(Self {
            race: CategoricalSampler::new(&RACE_WEIGHTS)?,
            at_risk_sex: CategoricalSampler::new(&AT_RISK_SEX_WEIGHTS)?,
            general_sex: CategoricalSampler::new(&GENERAL_SEX_WEIGHTS)?,
        })
    }

    /// 生成出生日期
    ///
    /// 月份 1-12、日 1-28 均匀抽取，年份从对应年龄段的年份池中均匀抽取
    pub fn generate_dob<R: Rng + ?Sized>(&self, rng: &mut R, at_risk: bool) -> Result<NaiveDate> {
        let month = rng.random_range(1..=12u32);
        let day = rng.random_range(1..=MAX_BIRTH_DAY);
        let years: &[i32] = if at_risk {
            &AT_RISK_BIRTH_YEARS
        } else {
            &GENERAL_BIRTH_YEARS
        };
        let year = *years
            .choose(rng)
            .ok_or_else(|| RosterError::InvalidWeights("出生年份池为空".to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RosterError::InvalidDate { year, month, day })
    }

    pub fn generate_race<R: Rng + ?Sized>(&self, rng: &mut R) -> Race {
        self.race.sample(rng)
    }

    pub fn generate_sex<R: Rng + ?Sized>(&self, rng: &mut R, at_risk: bool) -> Sex {
        if at_risk {
            self.at_risk_sex.sample(rng)
        } else {
            self.general_sex.sample(rng)
        }
    }
}

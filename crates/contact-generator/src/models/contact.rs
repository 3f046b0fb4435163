//! 联系人记录模型
//!
//! 名册中唯一的实体。状态标记完全由记录序号决定，
//! 姓名、出生日期、种族、性别则由生成器随机抽取。

use std::fmt;

use chrono::NaiveDate;

/// 每次运行生成的记录数量
pub const ROSTER_SIZE: usize = 50;

/// 序号小于该值的记录为已故的高风险联系人
pub const AT_RISK_DECEASED_CUTOFF: usize = 4;

/// 序号小于该值的记录为高风险联系人
pub const AT_RISK_CUTOFF: usize = 20;

/// 序号在 [AT_RISK_CUTOFF, DECEASED_CUTOFF) 内的记录为已故的普通联系人
pub const DECEASED_CUTOFF: usize = 22;

/// CSV 表头，列顺序固定
pub const CSV_HEADER: [&str; 11] = [
    "contactID",
    "firstName",
    "middleName",
    "lastName",
    "DoB",
    "race",
    "sex",
    "notes",
    "isDeceased",
    "isAtRisk",
    "isActive",
];

/// 出生日期输出格式 MM/DD/YYYY
pub const DOB_FORMAT: &str = "%m/%d/%Y";

/// 种族类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    Hispanic,
    WhiteNotHispanic,
    Black,
    Asian,
    Other,
}

impl Race {
    pub const ALL: [Race; 5] = [
        Self::Hispanic,
        Self::WhiteNotHispanic,
        Self::Black,
        Self::Asian,
        Self::Other,
    ];

    /// 获取输出标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hispanic => "hispanic",
            Self::WhiteNotHispanic => "white-not-hispanic",
            Self::Black => "black",
            Self::Asian => "asian",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 状态分段
///
/// 名册按序号划分为四段，每段对应一组固定的状态标记：
/// - AtRiskDeceased: [0, 4)
/// - AtRiskActive: [4, 20)
/// - Deceased: [20, 22)
/// - Active: [22, ..)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    AtRiskDeceased,
    AtRiskActive,
    Deceased,
    Active,
}

impl StatusBand {
    /// 根据记录序号确定所属分段
    pub fn for_index(index: usize) -> Self {
        match index {
            i if i < AT_RISK_DECEASED_CUTOFF => Self::AtRiskDeceased,
            i if i < AT_RISK_CUTOFF => Self::AtRiskActive,
            i if i < DECEASED_CUTOFF => Self::Deceased,
            _ => Self::Active,
        }
    }

    /// 获取该分段的状态标记
    pub fn status(&self) -> ContactStatus {
        match self {
            Self::AtRiskDeceased => ContactStatus {
                is_deceased: true,
                is_at_risk: true,
                is_active: false,
            },
            Self::AtRiskActive => ContactStatus {
                is_deceased: false,
                is_at_risk: true,
                is_active: true,
            },
            Self::Deceased => ContactStatus {
                is_deceased: true,
                is_at_risk: false,
                is_active: false,
            },
            Self::Active => ContactStatus {
                is_deceased: false,
                is_at_risk: false,
                is_active: true,
            },
        }
    }
}

/// 联系人状态标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactStatus {
    pub is_deceased: bool,
    pub is_at_risk: bool,
    pub is_active: bool,
}

impl ContactStatus {
    pub fn for_index(index: usize) -> Self {
        StatusBand::for_index(index).status()
    }
}

/// 联系人记录
///
/// 生成后只写入一次，不会再被修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub contact_id: usize,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub race: Race,
    pub sex: Sex,
    pub notes: String,
    pub status: ContactStatus,
}

impl ContactRecord {
    /// 出生日期字符串（MM/DD/YYYY）
    pub fn dob_string(&self) -> String {
        self.date_of_birth.format(DOB_FORMAT).to_string()
    }

    /// 按表头顺序输出 11 个字段
    pub fn csv_fields(&self) -> [String; 11] {
        [
            self.contact_id.to_string(),
            self.first_name.clone(),
            self.middle_name.clone(),
            self.last_name.clone(),
            self.dob_string(),
            self.race.as_str().to_string(),
            self.sex.as_str().to_string(),
            self.notes.clone(),
            flag(self.status.is_deceased).to_string(),
            flag(self.status.is_at_risk).to_string(),
            flag(self.status.is_active).to_string(),
        ]
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

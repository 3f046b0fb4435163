//! 联系人数据模型
//!
//! 包含联系人记录、种族、性别和状态分段等数据结构。

pub mod contact;

pub use contact::{
    AT_RISK_CUTOFF, AT_RISK_DECEASED_CUTOFF, CSV_HEADER, ContactRecord, ContactStatus,
    DECEASED_CUTOFF, DOB_FORMAT, ROSTER_SIZE, Race, Sex, StatusBand,
};

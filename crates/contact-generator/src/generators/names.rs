//! 姓名来源
//!
//! 名册只需要"给定角色（名/姓），返回一个随机且合理的人名"这一能力。
//! 默认使用 fake 的英文姓名库，也可以使用固定的姓名列表。

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use rand::seq::IndexedRandom;
use roster_shared::{Result, RosterError};

/// 姓名来源
///
/// 所有随机性都来自调用方传入的 rng，便于通过种子复现整份名册
pub trait NameSource {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// 基于 fake 英文姓名库的姓名来源
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerNames;

impl NameSource for FakerNames {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        FirstName().fake_with_rng(rng)
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        LastName().fake_with_rng(rng)
    }
}

/// 固定姓名列表
#[derive(Debug, Clone)]
pub struct NameList {
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl NameList {
    /// 创建姓名列表
    ///
    /// 任一列表为空，或姓名中包含逗号、换行（输出不做转义）时返回错误
    pub fn new<I, J>(first_names: I, last_names: J) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        let first_names: Vec<String> = first_names.into_iter().map(Into::into).collect();
        let last_names: Vec<String> = last_names.into_iter().map(Into::into).collect();

        if first_names.is_empty() {
            return Err(RosterError::NameCorpus("名字列表为空".to_string()));
        }
        if last_names.is_empty() {
            return Err(RosterError::NameCorpus("姓氏列表为空".to_string()));
        }
        if let Some(bad) = first_names
            .iter()
            .chain(last_names.iter())
            .find(|name| name.contains([',', '\n', '\r']))
        {
            return Err(RosterError::NameCorpus(format!(
                "姓名包含分隔符: {:?}",
                bad
            )));
        }

        Ok(Self {
            first_names,
            last_names,
        })
    }
}

impl NameSource for NameList {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // 构造时已保证非空
        self.first_names.choose(rng).cloned().unwrap_or_default()
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.last_names.choose(rng).cloned().unwrap_or_default()
    }
}

//! 自定义断言宏
//!
//! 提供针对名册输出的专用断言功能。

/// 断言行的状态标记 (isDeceased, isAtRisk, isActive)
#[macro_export]
macro_rules! assert_flags {
    ($row:expr, $deceased:expr, $at_risk:expr, $active:expr) => {{
        assert_eq!(
            $row.flags(),
            ($deceased, $at_risk, $active),
            "第 {} 行的状态标记不正确: {}",
            $row.contact_id,
            $row.raw
        );
    }};
}

/// 断言行的字段取值在允许集合内
#[macro_export]
macro_rules! assert_one_of {
    ($value:expr, $allowed:expr) => {
        assert!(
            $allowed.contains(&$value.as_str()),
            "取值 {:?} 不在允许范围 {:?} 内",
            $value,
            $allowed
        );
    };
}

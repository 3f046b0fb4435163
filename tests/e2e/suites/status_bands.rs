//! 状态分段测试套件
//!
//! 状态标记只由序号决定，与随机种子无关。

use crate::assert_flags;
use crate::setup::TestEnvironment;

#[cfg(test)]
mod band_tests {
    use super::*;

    #[test]
    fn test_flags_follow_index_bands() {
        let env = TestEnvironment::setup().unwrap();
        env.generate(None).unwrap();

        let file = env.read_output().unwrap();
        for row in &file.rows {
            match row.contact_id {
                0..=3 => assert_flags!(row, "1", "1", "0"),
                4..=19 => assert_flags!(row, "0", "1", "1"),
                20..=21 => assert_flags!(row, "1", "0", "0"),
                _ => assert_flags!(row, "0", "0", "1"),
            }
        }
    }

    #[test]
    fn test_first_row_suffix() {
        let env = TestEnvironment::setup().unwrap();
        env.generate(Some(5)).unwrap();

        let file = env.read_output().unwrap();
        assert!(file.rows[0].raw.starts_with("0,"));
        assert!(file.rows[0].raw.ends_with(",1,1,0"));
    }

    #[test]
    fn test_stats_match_file() {
        let env = TestEnvironment::setup().unwrap();
        let stats = env.generate(Some(6)).unwrap();

        let file = env.read_output().unwrap();
        let at_risk = file.rows.iter().filter(|r| r.is_at_risk == "1").count();
        let deceased = file.rows.iter().filter(|r| r.is_deceased == "1").count();
        let active = file.rows.iter().filter(|r| r.is_active == "1").count();

        assert_eq!(stats.total, file.rows.len());
        assert_eq!(stats.at_risk, at_risk);
        assert_eq!(stats.deceased, deceased);
        assert_eq!(stats.active, active);
        assert_eq!((at_risk, deceased, active), (20, 6, 44));
    }
}

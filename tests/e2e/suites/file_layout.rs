//! 输出文件结构测试套件
//!
//! 验证表头、行数、ID 顺序以及文件覆盖行为。

use crate::helpers::roster_file::EXPECTED_HEADER;
use crate::setup::TestEnvironment;

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_file_has_header_and_fifty_rows() {
        let env = TestEnvironment::setup().unwrap();
        env.generate(Some(1)).unwrap();

        let file = env.read_output().unwrap();
        assert_eq!(file.header, EXPECTED_HEADER);
        assert_eq!(file.line_count(), 51);
        assert_eq!(file.rows.len(), 50);
    }

    #[test]
    fn test_ids_are_sequential() {
        let env = TestEnvironment::setup().unwrap();
        env.generate(None).unwrap();

        let file = env.read_output().unwrap();
        let ids: Vec<usize> = file.rows.iter().map(|r| r.contact_id).collect();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let env = TestEnvironment::setup().unwrap();
        env.generate(Some(2)).unwrap();

        let file = env.read_output().unwrap();
        for line in file.text.lines() {
            assert_eq!(line, line.trim_end(), "行尾不应有空白: {:?}", line);
            assert!(!line.contains('"'), "字段不应加引号: {}", line);
        }
        assert!(!file.text.contains('\r'));
    }

    #[test]
    fn test_rerun_overwrites_previous_file() {
        let env = TestEnvironment::setup().unwrap();
        std::fs::write(env.output_path(), "old,data\n".repeat(200)).unwrap();

        env.generate(Some(3)).unwrap();
        let file = env.read_output().unwrap();
        assert_eq!(file.line_count(), 51);
        assert!(!file.text.contains("old,data"));
    }

    #[test]
    fn test_same_seed_is_byte_identical() {
        let env = TestEnvironment::setup().unwrap();
        let a = env.path("a.csv");
        let b = env.path("b.csv");

        env.generate_to(&a, Some(77)).unwrap();
        env.generate_to(&b, Some(77)).unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let env = TestEnvironment::setup().unwrap();
        let path = env.path("missing-dir/contacts.csv");

        assert!(env.generate_to(&path, Some(4)).is_err());
        assert!(!path.exists());
    }
}

//! 行コレクション往復のプロパティテスト
//!
//! 公開APIのみを使い、任意の行コレクションについて
//! write_all_lines → read_all_lines の往復恒等性を確認する

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tempfile::TempDir;
use textio::TextIo;

/// 行終端を含まない1論理行の生成戦略
fn line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        any::<char>().prop_filter("line may not contain terminators", |ch| {
            *ch != '\n' && *ch != '\r'
        }),
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn write_then_read_is_identity(lines in proptest::collection::vec(line_strategy(), 0..24)) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roundtrip.txt");
        let io = TextIo::default();

        io.write_all_lines(&path, &lines).unwrap();
        prop_assert_eq!(io.read_all_lines(&path), Some(lines));
    }

    #[test]
    fn append_concatenates_in_order(
        first in proptest::collection::vec(line_strategy(), 0..12),
        second in proptest::collection::vec(line_strategy(), 0..12),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("concat.txt");
        let io = TextIo::default();

        io.write_all_lines(&path, &first).unwrap();
        io.append_all_lines(&path, &second).unwrap();

        let mut expected = first.clone();
        expected.extend(second.iter().cloned());
        prop_assert_eq!(io.read_all_lines(&path), Some(expected));
    }
}

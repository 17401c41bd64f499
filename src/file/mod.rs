//! ファイル入出力モジュール
//!
//! 設計方針：
//! - 同期・一括転送のみ（ストリーミングなし、部分結果なし）
//! - ハンドルは単一所有・全経路でクローズ
//! - 読み込み系は失敗を握りつぶしてNone、書き込み系はエラーを呼び出し元へ返す

pub mod facade;
pub mod handle;

// 公開API
pub use facade::{
    append_all_lines, exists, read_all_doubles, read_all_ints, read_all_lines, write_all_lines,
    TextIo,
};
pub use handle::{ReadHandle, WriteHandle};

//! textio - テキストファイル全体入出力の簡易ユーティリティ
//!
//! ファイル全体を行コレクションや型付き数値配列として読み書きし、
//! ストリーム準備やエラー処理の定型コードから呼び出し側を解放する

// コアモジュール
pub mod config;
pub mod error;

// データ層
pub mod file;

// 公開API
pub use config::IoConfig;
pub use error::{FileError, Result, TextIoError};
pub use file::{
    append_all_lines, exists, read_all_doubles, read_all_ints, read_all_lines, write_all_lines,
    ReadHandle, TextIo, WriteHandle,
};

//! エラーハンドリング
//!
//! ライブラリ全体で使用される統一されたエラー型を定義
//! 元設計の番兵値をタグ付き失敗理由を持つResult型へ置き換える：
//! 呼び出し側は例外捕捉ではなく結果の比較で失敗を判定する

use std::io;
use std::path::Path;
use thiserror::Error;

/// ライブラリ全体のエラー型
///
/// write系転送操作が呼び出し元へ返す回復不能エラー。
/// 読み込み系操作はこの型を使わず、失敗をNoneとして握りつぶす
#[derive(Error, Debug, Clone)]
pub enum TextIoError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("File already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// io::Errorを失敗理由へ分類する
    pub(crate) fn classify(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            io::ErrorKind::InvalidInput => FileError::InvalidPath { path },
            _ => FileError::Io {
                message: err.to_string(),
            },
        }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TextIoError>;

/// 各モジュール固有のResult型
pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classify_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = FileError::classify(&PathBuf::from("missing.txt"), io_err);

        match err {
            FileError::NotFound { path } => assert_eq!(path, "missing.txt"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn classify_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FileError::classify(&PathBuf::from("/root/locked.txt"), io_err);

        assert!(matches!(err, FileError::PermissionDenied { .. }));
    }

    #[test]
    fn classify_other_kinds_as_io() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "cut short");
        let err = FileError::classify(&PathBuf::from("data.txt"), io_err);

        match err {
            FileError::Io { message } => assert!(message.contains("cut short")),
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn error_display_messages() {
        let err = FileError::NotFound {
            path: "test.txt".to_string(),
        };
        assert_eq!(err.to_string(), "File not found: test.txt");

        let err = FileError::AlreadyExists {
            path: "test.txt".to_string(),
        };
        assert_eq!(err.to_string(), "File already exists: test.txt");

        let err = FileError::Parse {
            line: 2,
            message: "\"abc\": invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn file_error_converts_to_textio_error() {
        let err = FileError::NotFound {
            path: "test.txt".to_string(),
        };
        let top: TextIoError = err.into();

        assert!(matches!(top, TextIoError::File(FileError::NotFound { .. })));
    }
}

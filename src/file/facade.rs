//! ファイルアクセスファサード
//!
//! 存在確認、4種のオープン、ファイル全体の転送操作を提供する。
//! 失敗方針は2系統あり、意図的に非対称：
//! - 握りつぶし系（存在確認・オープン・読み込み）：タグ付き失敗理由または
//!   Noneを返し、診断出力はverbose設定時のみ
//! - エスカレーション系（write_all_lines / append_all_lines）：ハンドル解放後、
//!   設定に関わらず診断を出力してエラーを呼び出し元へ返す

use crate::config::IoConfig;
use crate::error::{file, FileError, Result};
use crate::file::handle::{ReadHandle, WriteHandle, WriteMode};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// ファイルアクセスファサード
///
/// 構築後は不変。状態を持たないため共有・複製しても安全
#[derive(Debug, Clone, Default)]
pub struct TextIo {
    config: IoConfig,
}

impl TextIo {
    /// 設定を指定して構築
    pub fn new(config: IoConfig) -> Self {
        Self { config }
    }

    /// 現在の設定
    pub fn config(&self) -> IoConfig {
        self.config
    }

    /// ファイルの存在確認
    ///
    /// 指定パスにファイルシステム上のエントリが存在すればtrue。
    /// 確認処理自体が失敗した場合もfalseになり、エラーは漏れない
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if path.exists() {
            return true;
        }
        if self.config.verbose {
            eprintln!("file {} does not exist", path.display());
        }
        false
    }

    /// 読み込み用にオープン
    ///
    /// 成功時はファイル先頭に位置づけられたハンドルを返す
    pub fn open_read(&self, path: impl AsRef<Path>) -> file::Result<ReadHandle> {
        ReadHandle::open(path.as_ref()).map_err(|e| {
            self.report("open_read", &e);
            e
        })
    }

    /// 上書き用にオープン（なければ作成、あれば切り詰め）
    pub fn open_write(&self, path: impl AsRef<Path>) -> file::Result<WriteHandle> {
        WriteHandle::open(path.as_ref(), WriteMode::Truncate).map_err(|e| {
            self.report("open_write", &e);
            e
        })
    }

    /// 新規作成専用オープン
    ///
    /// 存在確認が先に行われ、既存ならAlreadyExistsで失敗する。
    /// 確認とオープンの間の競合は許容される（方針として存在確認が優先）
    pub fn open_new(&self, path: impl AsRef<Path>) -> file::Result<WriteHandle> {
        let path = path.as_ref();
        if self.exists(path) {
            let err = FileError::AlreadyExists {
                path: path.display().to_string(),
            };
            self.report("open_new", &err);
            return Err(err);
        }
        self.open_write(path)
    }

    /// 追記用にオープン（なければ作成、末尾に位置づけ）
    pub fn open_append(&self, path: impl AsRef<Path>) -> file::Result<WriteHandle> {
        WriteHandle::open(path.as_ref(), WriteMode::Append).map_err(|e| {
            self.report("open_append", &e);
            e
        })
    }

    /// ファイル全体を行コレクションとして読み込む
    ///
    /// I/Oエラー時はNone。内部で取得したハンドルは全経路で解放される
    pub fn read_all_lines(&self, path: impl AsRef<Path>) -> Option<Vec<String>> {
        match self.read_lines_inner(path.as_ref()) {
            Ok(lines) => Some(lines),
            Err(err) => {
                self.report("read_all_lines", &err);
                None
            }
        }
    }

    /// 整数配列として読み込む（1行1整数）
    ///
    /// I/Oエラー、または整数として解釈できない行が1行でもあればNone。
    /// 部分結果は返さない
    pub fn read_all_ints(&self, path: impl AsRef<Path>) -> Option<Vec<i32>> {
        self.read_parsed(path.as_ref(), "read_all_ints")
    }

    /// 浮動小数点数配列として読み込む（1行1数値）
    ///
    /// 標準の10進解釈（ロケール非依存、符号・指数表記可）。失敗時はNone
    pub fn read_all_doubles(&self, path: impl AsRef<Path>) -> Option<Vec<f64>> {
        self.read_parsed(path.as_ref(), "read_all_doubles")
    }

    /// 行コレクションをファイルへ上書き保存する
    ///
    /// 各行の後に行終端（LF）を入力順で書き込む。オープン失敗・書き込み失敗は
    /// 握りつぶさず、診断出力の上で回復不能エラーとして返す。
    /// 取得済みハンドルはエラー経路でも先に解放される
    pub fn write_all_lines<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        lines: &[S],
    ) -> Result<()> {
        self.transfer_lines(path.as_ref(), lines, WriteMode::Truncate, "write_all_lines")
    }

    /// 行コレクションをファイル末尾へ追記する
    ///
    /// 既存内容は保持され、契約はwrite_all_linesと同じ
    pub fn append_all_lines<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        lines: &[S],
    ) -> Result<()> {
        self.transfer_lines(path.as_ref(), lines, WriteMode::Append, "append_all_lines")
    }

    fn read_lines_inner(&self, path: &Path) -> file::Result<Vec<String>> {
        let mut handle = ReadHandle::open(path)?;
        let content = handle.read_to_string()?;
        Ok(split_lines(&content))
    }

    fn read_parsed<T>(&self, path: &Path, operation: &str) -> Option<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let result = self.read_lines_inner(path).and_then(|lines| {
            lines
                .iter()
                .enumerate()
                .map(|(index, line)| {
                    line.parse::<T>().map_err(|e| FileError::Parse {
                        line: index + 1,
                        message: format!("{:?}: {}", line, e),
                    })
                })
                .collect()
        });
        match result {
            Ok(values) => Some(values),
            Err(err) => {
                self.report(operation, &err);
                None
            }
        }
    }

    fn transfer_lines<S: AsRef<str>>(
        &self,
        path: &Path,
        lines: &[S],
        mode: WriteMode,
        operation: &str,
    ) -> Result<()> {
        let result = self.transfer_inner(path, lines, mode);
        if let Err(err) = &result {
            self.report_fatal(operation, err);
        }
        result.map_err(Into::into)
    }

    fn transfer_inner<S: AsRef<str>>(
        &self,
        path: &Path,
        lines: &[S],
        mode: WriteMode,
    ) -> file::Result<()> {
        let mut handle = match mode {
            WriteMode::Truncate => self.open_write(path)?,
            WriteMode::Append => self.open_append(path)?,
        };
        for line in lines {
            // エラー時はDropがハンドルを解放する
            handle.write_line(line.as_ref())?;
        }
        handle.close()
    }

    /// 握りつぶし系失敗の診断出力（verbose設定時のみstderr）
    fn report(&self, operation: &str, err: &FileError) {
        log::warn!("{} failed: {}", operation, err);
        if self.config.verbose {
            eprintln!("exception in {}: {}", operation, err);
        }
    }

    /// エスカレーション系失敗の診断出力（設定に関わらずstderr）
    fn report_fatal(&self, operation: &str, err: &FileError) {
        log::error!("{} failed: {}", operation, err);
        eprintln!("exception in {}: {}", operation, err);
    }
}

/// 改行境界（CRLF / LF / 単独CR）で論理行へ分割する
///
/// 末尾の行終端は余分な空行を生まない。各要素は終端を含まない1論理行
fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// デフォルト設定（診断出力なし）での存在確認
pub fn exists(path: impl AsRef<Path>) -> bool {
    TextIo::default().exists(path)
}

/// デフォルト設定での全行読み込みの便利関数
pub fn read_all_lines(path: impl AsRef<Path>) -> Option<Vec<String>> {
    TextIo::default().read_all_lines(path)
}

/// デフォルト設定での全行上書き保存の便利関数
pub fn write_all_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    TextIo::default().write_all_lines(path, lines)
}

/// デフォルト設定での全行追記の便利関数
pub fn append_all_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    TextIo::default().append_all_lines(path, lines)
}

/// デフォルト設定での整数配列読み込みの便利関数
pub fn read_all_ints(path: impl AsRef<Path>) -> Option<Vec<i32>> {
    TextIo::default().read_all_ints(path)
}

/// デフォルト設定での浮動小数点数配列読み込みの便利関数
pub fn read_all_doubles(path: impl AsRef<Path>) -> Option<Vec<f64>> {
    TextIo::default().read_all_doubles(path)
}

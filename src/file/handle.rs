//! ファイルハンドル
//!
//! 読み込み・書き込み用の所有ハンドル。所有者は呼び出し元ただ一つで、
//! 正常・エラーどの経路でもDropによって必ず解放される

use crate::error::{file, FileError};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// 読み込み用ハンドル
///
/// ファイル先頭に位置づけられた入力ストリーム
#[derive(Debug)]
pub struct ReadHandle {
    path: PathBuf,
    reader: BufReader<File>,
}

impl ReadHandle {
    /// ファイルを読み込み用に開く
    pub(crate) fn open(path: &Path) -> file::Result<Self> {
        let inner = File::open(path).map_err(|e| FileError::classify(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(inner),
        })
    }

    /// 対象ファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 1論理行を読み込む
    ///
    /// 行終端（LF / CRLF）は含まれない。EOFに達したらNone
    pub fn read_line(&mut self) -> file::Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| FileError::classify(&self.path, e))?;
        if read == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// 残りの全内容を文字列として読み込む
    pub fn read_to_string(&mut self) -> file::Result<String> {
        let mut content = String::new();
        self.reader
            .read_to_string(&mut content)
            .map_err(|e| FileError::classify(&self.path, e))?;
        Ok(content)
    }
}

/// 書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteMode {
    /// 既存内容を破棄して上書き（なければ作成）
    Truncate,
    /// 末尾へ追記（なければ作成）
    Append,
}

/// 書き込み用ハンドル
///
/// 上書きモードではファイル先頭、追記モードでは末尾に位置づけられる
#[derive(Debug)]
pub struct WriteHandle {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl WriteHandle {
    /// ファイルを書き込み用に開く
    pub(crate) fn open(path: &Path, mode: WriteMode) -> file::Result<Self> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            WriteMode::Truncate => options.truncate(true),
            WriteMode::Append => options.append(true),
        };
        let inner = options.open(path).map_err(|e| FileError::classify(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(inner),
        })
    }

    /// 対象ファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 1行と行終端（LF）を書き込む
    pub fn write_line(&mut self, line: &str) -> file::Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| FileError::classify(&self.path, e))
    }

    /// バッファを書き出してハンドルを閉じる
    pub fn close(mut self) -> file::Result<()> {
        self.writer
            .flush()
            .map_err(|e| FileError::classify(&self.path, e))
    }
}

impl Drop for WriteHandle {
    fn drop(&mut self) {
        // closeを経ない経路でもバッファは書き出す
        let _ = self.writer.flush();
    }
}

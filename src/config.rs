//! 入出力設定
//!
//! 元設計のプロセス全体の冗長出力フラグを、ファサード構築時に渡す
//! 設定値へ置き換える。デフォルトは診断出力なし

/// ファサード構築時に渡す入出力設定
///
/// `verbose`は診断出力のみに影響し、制御フローや戻り値には一切影響しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoConfig {
    /// 握りつぶし系の失敗時に診断メッセージをstderrへ出力するか
    pub verbose: bool,
}

impl IoConfig {
    /// 診断出力ありの設定
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    /// 診断出力なしの設定（デフォルトと同じ）
    pub fn silent() -> Self {
        Self { verbose: false }
    }
}

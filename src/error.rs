//! 構築時エラー
//!
//! すべての構築操作は失敗時に [`ConstructError`] を返します。
//! エラーはどの引数がどの規則に違反したかを保持し、[`ConstructError::kind`] で
//! 大分類（構造・型・範囲）を取得できます。

use thiserror::Error;

use crate::array::DType;
use crate::policy::Policy;

/// このクレート全体で使う `Result` エイリアス
pub type Result<T> = std::result::Result<T, ConstructError>;

/// エラーの大分類
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 引数の構造（シーケンス性・長さ・形状）の違反
    Arity,
    /// 要素が宣言された要素型の制約を満たさない
    Type,
    /// バックエンドが確保できない範囲の要求
    Range,
}

/// 構築操作のエラー
#[derive(Debug, Error)]
pub enum ConstructError {
    /// シーケンスが要求される位置に別の値が渡された
    #[error("`{argument}` must be a sequence, got {found}")]
    NotASequence {
        argument: &'static str,
        found: String,
    },

    /// 兄弟シーケンスの長さ不一致
    #[error("sibling sequences must have the same length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    /// 空のリストからは積み上げる形状を決められない
    #[error("cannot stack an empty list of arrays")]
    EmptyStack,

    /// バックエンドが形状を拒否した（要素数と軸の積の不一致など）
    #[error("backend rejected the requested shape: {0}")]
    Reshape(#[from] ndarray::ShapeError),

    /// 厳密な整数が要求される引数に別の値が渡された
    #[error("`{argument}` must be an integer, got {found}")]
    NotAnInteger {
        argument: &'static str,
        found: String,
    },

    /// 要素が宣言されたポリシーを満たさない
    #[error("`{argument}[{index}]` is not allowed by the {policy} policy: got {found}")]
    ElementMismatch {
        argument: &'static str,
        index: usize,
        policy: Policy,
        found: String,
    },

    /// 積み上げの入力が 2 次元 float64 配列ではない
    #[error("input {index} must be a two-dimensional float64 array, got {ndim}-dimensional {dtype}")]
    NotStackable {
        index: usize,
        ndim: usize,
        dtype: DType,
    },

    /// 負のカウント
    #[error("`{argument}` must be non-negative, got {value}")]
    NegativeCount { argument: &'static str, value: i64 },

    /// 整数表現ではあるが 64bit 符号付きストレージに収まらない
    #[error("`{argument}` holds {value}, which does not fit into 64-bit signed storage")]
    IntOutOfRange { argument: &'static str, value: u64 },
}

impl ConstructError {
    /// エラーの大分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotASequence { .. }
            | Self::LengthMismatch { .. }
            | Self::EmptyStack
            | Self::Reshape(_) => ErrorKind::Arity,
            Self::NotAnInteger { .. }
            | Self::ElementMismatch { .. }
            | Self::NotStackable { .. } => ErrorKind::Type,
            Self::NegativeCount { .. } | Self::IntOutOfRange { .. } => ErrorKind::Range,
        }
    }
}

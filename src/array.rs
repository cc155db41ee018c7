//! 型付き配列ハンドル
//!
//! [`TypedArray`] は構築時に解決された要素型を保持し、以後は再検査
//! しません。ストレージは常にこの型が所有し、構築後に呼び出し元の
//! データと共有されることはありません。クローンはディープコピーです。

use std::fmt;
use std::mem;

use ndarray::ArrayD;

/// 要素型タグ
///
/// 構築された配列は常にこの 3 種類のうちちょうど 1 つの型を持つ。
/// 「混在」した実行時型は存在しない。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64bit 符号付き整数
    I64,
    /// 64bit 浮動小数点数
    F64,
    /// 固定長テキスト
    Str,
}

impl DType {
    /// バックエンド流の型名
    pub fn name(&self) -> &'static str {
        match self {
            DType::I64 => "int64",
            DType::F64 => "float64",
            DType::Str => "str",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// 内部ストレージ。テキストは構築時に確定した固定長（文字数）を持つ
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Backing {
    I64(ArrayD<i64>),
    F64(ArrayD<f64>),
    Str { data: ArrayD<String>, width: usize },
}

/// 検証済みの型付き n 次元配列
///
/// いずれかのコンストラクタが成功したときにだけ生成され、形状・要素型・
/// 内容がすべて確定している。部分的に構築された配列は観測できない。
#[derive(Clone, PartialEq)]
pub struct TypedArray {
    backing: Backing,
}

impl TypedArray {
    pub(crate) fn new(backing: Backing) -> Self {
        Self { backing }
    }

    // テキスト配列の固定長は全要素の最大文字数
    pub(crate) fn from_text(data: ArrayD<String>) -> Self {
        let width = data.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        Self {
            backing: Backing::Str { data, width },
        }
    }

    /// 形状。空スライスは 0 次元（スカラー）を表す
    pub fn shape(&self) -> &[usize] {
        match &self.backing {
            Backing::I64(a) => a.shape(),
            Backing::F64(a) => a.shape(),
            Backing::Str { data, .. } => data.shape(),
        }
    }

    /// 次元数
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// 要素数
    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::I64(a) => a.len(),
            Backing::F64(a) => a.len(),
            Backing::Str { data, .. } => data.len(),
        }
    }

    /// 要素数が 0 かどうか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 要素型タグ
    pub fn dtype(&self) -> DType {
        match &self.backing {
            Backing::I64(_) => DType::I64,
            Backing::F64(_) => DType::F64,
            Backing::Str { .. } => DType::Str,
        }
    }

    /// 1 要素あたりのバイト数
    ///
    /// 数値型は 8。テキストは固定長 Unicode 表現に合わせて
    /// 1 文字 4 バイト換算。
    pub fn item_size(&self) -> usize {
        match &self.backing {
            Backing::I64(_) => mem::size_of::<i64>(),
            Backing::F64(_) => mem::size_of::<f64>(),
            Backing::Str { width, .. } => 4 * width,
        }
    }

    /// テキスト配列の固定長（文字数）。数値配列では `None`
    pub fn text_width(&self) -> Option<usize> {
        match &self.backing {
            Backing::Str { width, .. } => Some(*width),
            _ => None,
        }
    }

    /// int64 バッキングへの参照。要素型が一致しない場合は `None`
    pub fn as_i64(&self) -> Option<&ArrayD<i64>> {
        match &self.backing {
            Backing::I64(a) => Some(a),
            _ => None,
        }
    }

    /// float64 バッキングへの参照
    pub fn as_f64(&self) -> Option<&ArrayD<f64>> {
        match &self.backing {
            Backing::F64(a) => Some(a),
            _ => None,
        }
    }

    /// テキストバッキングへの参照
    pub fn as_str(&self) -> Option<&ArrayD<String>> {
        match &self.backing {
            Backing::Str { data, .. } => Some(data),
            _ => None,
        }
    }

    /// int64 バッキングを取り出して所有権ごと返す
    pub fn into_i64(self) -> Option<ArrayD<i64>> {
        match self.backing {
            Backing::I64(a) => Some(a),
            _ => None,
        }
    }

    /// float64 バッキングを取り出して所有権ごと返す
    pub fn into_f64(self) -> Option<ArrayD<f64>> {
        match self.backing {
            Backing::F64(a) => Some(a),
            _ => None,
        }
    }

    /// テキストバッキングを取り出して所有権ごと返す
    pub fn into_str(self) -> Option<ArrayD<String>> {
        match self.backing {
            Backing::Str { data, .. } => Some(data),
            _ => None,
        }
    }
}

impl fmt::Debug for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .finish()
    }
}

impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backing {
            Backing::I64(a) => a.fmt(f),
            Backing::F64(a) => a.fmt(f),
            Backing::Str { data, .. } => data.fmt(f),
        }
    }
}

// ============================================================================
// バックエンドネイティブ配列の受け入れ
// ============================================================================

impl From<ArrayD<i64>> for TypedArray {
    fn from(array: ArrayD<i64>) -> Self {
        Self::new(Backing::I64(array))
    }
}

impl From<ArrayD<f64>> for TypedArray {
    fn from(array: ArrayD<f64>) -> Self {
        Self::new(Backing::F64(array))
    }
}

impl From<ArrayD<String>> for TypedArray {
    fn from(array: ArrayD<String>) -> Self {
        Self::from_text(array)
    }
}

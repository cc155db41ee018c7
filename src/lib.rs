//! varray: 検証付きで構築する型付き多次元配列
//!
//! 緩く型付けされた入力（ネストしたシーケンス・スカラー・既存の配列）を
//! 受け取り、宣言された要素型の制約に適合しない入力を拒否して、次元数・
//! 要素型・形状の確定した配列値を生成するクレートです。数値計算に入る
//! 前の、信頼できないデータの唯一の通過点として使います。配列の実体は
//! `ndarray` クレートが保持し、入力値は `serde_json::Value` で表します。
//!
//! # 特徴
//!
//! - **厳密な分類**: テキストの `"3"` は整数ではなく、真偽値は `1` に
//!   ならない。`3.0` は整数チェックを通らない
//! - **一方向の昇格**: 整数は float64 の契約を満たすが、逆はない
//! - **テキストフォールバック**: 任意型のコンストラクタでは、数値以外が
//!   混ざると配列全体が固定長テキストに解決される（要素は失われない）
//! - **原子性**: どのコンストラクタも、完全に有効な配列を返すか型付き
//!   エラーを返すかのどちらかで、部分的な配列は観測できない
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use varray::TypedArray;
//!
//! // 整数入力は float64 の契約を満たす（昇格）
//! let array = TypedArray::from_float_list(&json!([1, 2.5, 3]))?;
//! assert_eq!(array.dtype().name(), "float64");
//! assert_eq!(array.shape(), &[3]);
//!
//! // 逆方向はない: 小数は整数専用コンストラクタを通らない
//! assert!(TypedArray::from_int_list(&json!([1, 2.5, 3])).is_err());
//! # Ok::<(), varray::ConstructError>(())
//! ```

mod arity;
pub mod array;
pub mod classify;
mod construct;
pub mod error;
pub mod policy;

// Re-exports
pub use array::{DType, TypedArray};
pub use classify::{Class, classify, stringify};
pub use error::{ConstructError, ErrorKind, Result};
pub use policy::Policy;

/// 主要な型をまとめてインポート: `use varray::prelude::*;`
pub mod prelude {
    pub use crate::array::{DType, TypedArray};
    pub use crate::error::{ConstructError, ErrorKind};
}

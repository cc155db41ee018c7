//! 厳密な値分類
//!
//! 1 つの入力値が「整数である」「浮動小数点数である」を暗黙の型変換なしで
//! 判定します。テキストの `"3"` は整数ではなく、真偽値は `1` として
//! 扱われません。「何が数値か」の唯一の判定点であり、数値の扱いを変える
//! 場合はこのモジュールだけを変更します。

use serde_json::Value;

use crate::error::{ConstructError, Result};
use crate::policy::Policy;

/// 1 つの値の分類結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// 整数表現を持つ数値。`3.0` は含まれない
    Int,
    /// 小数表現を持つ数値
    Float,
    /// 数値以外（テキスト・真偽値・シーケンスなど）
    Other,
}

/// 値を分類する
///
/// 判定するのは表現そのもので、値としての等価性ではない。
/// 整数に等しい `3.0` も [`Class::Float`] に分類される。
///
/// ```
/// use serde_json::json;
/// use varray::{Class, classify};
///
/// assert_eq!(classify(&json!(3)), Class::Int);
/// assert_eq!(classify(&json!(3.0)), Class::Float);
/// assert_eq!(classify(&json!("3")), Class::Other);
/// assert_eq!(classify(&json!(true)), Class::Other);
/// ```
pub fn classify(value: &Value) -> Class {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Class::Int,
        Value::Number(_) => Class::Float,
        _ => Class::Other,
    }
}

/// テキストフォールバック用の文字列化
///
/// 文字列は引用符なしでそのまま、その他の値はコンパクトな JSON 表現に
/// なる。数値を文字列化した結果からは元の数値が読み戻せる。
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// エラーメッセージ用の値の説明。シーケンスは全要素を展開しない
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("a sequence of {} elements", items.len()),
        Value::Object(_) => "an object".to_string(),
        other => other.to_string(),
    }
}

/// リスト要素を i64 に変換する。整数表現以外はポリシー違反
pub(crate) fn element_to_i64(
    value: &Value,
    argument: &'static str,
    index: usize,
    policy: Policy,
) -> Result<i64> {
    let mismatch = || ConstructError::ElementMismatch {
        argument,
        index,
        policy,
        found: describe(value),
    };
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(v)
            } else if let Some(v) = n.as_u64() {
                // 整数表現ではあるが i64 に収まらない
                Err(ConstructError::IntOutOfRange { argument, value: v })
            } else {
                Err(mismatch())
            }
        }
        _ => Err(mismatch()),
    }
}

/// リスト要素を f64 に変換する。数値以外はポリシー違反
pub(crate) fn element_to_f64(
    value: &Value,
    argument: &'static str,
    index: usize,
    policy: Policy,
) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(ConstructError::ElementMismatch {
            argument,
            index,
            policy,
            found: describe(value),
        }),
        other => Err(ConstructError::ElementMismatch {
            argument,
            index,
            policy,
            found: describe(other),
        }),
    }
}

//! 構造検査
//!
//! 要素を 1 つも検査する前に、引数の構造（シーケンスであること・
//! 兄弟リストの長さ・カウント引数の厳密な整数性）を確認します。

use serde_json::Value;

use crate::classify;
use crate::error::{ConstructError, Result};

/// シーケンスであることを確認して要素列を借用する
pub(crate) fn expect_sequence<'a>(value: &'a Value, argument: &'static str) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ConstructError::NotASequence {
            argument,
            found: classify::describe(other),
        }),
    }
}

/// 兄弟シーケンスの長さが一致することを確認する
pub(crate) fn expect_same_length(left: &[Value], right: &[Value]) -> Result<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(ConstructError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// 厳密に整数である引数を i64 として取り出す
pub(crate) fn expect_int(value: &Value, argument: &'static str) -> Result<i64> {
    let Value::Number(n) = value else {
        return Err(ConstructError::NotAnInteger {
            argument,
            found: classify::describe(value),
        });
    };
    match (n.as_i64(), n.as_u64()) {
        (Some(v), _) => Ok(v),
        (None, Some(v)) => Err(ConstructError::IntOutOfRange { argument, value: v }),
        // 小数表現の数値
        (None, None) => Err(ConstructError::NotAnInteger {
            argument,
            found: classify::describe(value),
        }),
    }
}

/// 厳密に整数かつ非負のカウント引数を usize として取り出す
pub(crate) fn expect_count(value: &Value, argument: &'static str) -> Result<usize> {
    match expect_int(value, argument)? {
        v if v < 0 => Err(ConstructError::NegativeCount { argument, value: v }),
        v => Ok(v as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_sequence() {
        let v = json!([1, 2, 3]);
        assert_eq!(expect_sequence(&v, "values").unwrap().len(), 3);
    }

    #[test]
    fn test_expect_sequence_rejects_scalar() {
        let e = expect_sequence(&json!(5), "left").unwrap_err();
        assert!(matches!(e, ConstructError::NotASequence { argument: "left", .. }));
    }

    #[test]
    fn test_expect_same_length() {
        let a = [json!(1), json!(2)];
        let b = [json!(3)];
        assert!(expect_same_length(&a, &a).is_ok());
        assert!(matches!(
            expect_same_length(&a, &b),
            Err(ConstructError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_expect_count() {
        assert_eq!(expect_count(&json!(15), "item_count").unwrap(), 15);
        assert_eq!(expect_count(&json!(0), "item_count").unwrap(), 0);
    }

    #[test]
    fn test_expect_count_rejects_fraction() {
        let e = expect_count(&json!(15.5), "item_count").unwrap_err();
        assert!(matches!(e, ConstructError::NotAnInteger { .. }));
        // 整数値でも小数表現なら通らない
        let e = expect_count(&json!(15.0), "item_count").unwrap_err();
        assert!(matches!(e, ConstructError::NotAnInteger { .. }));
    }

    #[test]
    fn test_expect_count_rejects_negative() {
        let e = expect_count(&json!(-4), "axis_count").unwrap_err();
        assert!(matches!(
            e,
            ConstructError::NegativeCount { argument: "axis_count", value: -4 }
        ));
    }

    #[test]
    fn test_expect_int_allows_negative() {
        assert_eq!(expect_int(&json!(-42), "value").unwrap(), -42);
    }
}

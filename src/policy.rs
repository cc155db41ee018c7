//! 要素型の解決
//!
//! 構造検査を通過した要素集合から、エントリポイントごとに宣言された
//! ポリシーに従って結果の要素型を決定します。整数→浮動小数点の昇格は
//! 一方向で、ここでのみ判定されます。

use std::fmt;

use serde_json::Value;

use crate::array::DType;
use crate::classify::{self, Class};
use crate::error::{ConstructError, Result};

/// 宣言されたポリシー
///
/// どの公開コンストラクタを呼んだかで決まり、呼び出し側が個別に
/// 指定することはない。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// すべての要素が整数でなければならない
    IntOnly,
    /// 整数と浮動小数点数を受け付け、結果は常に float64
    FloatPermissive,
    /// 任意の要素を受け付け、数値以外が混ざれば全体をテキストに落とす
    Unconstrained,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::IntOnly => "int-only",
            Policy::FloatPermissive => "float-permissive",
            Policy::Unconstrained => "unconstrained",
        };
        f.write_str(name)
    }
}

/// ラベル付き要素グループの集合から結果の要素型を決定する
///
/// 判定はリクエスト内の全要素の合併に対して行う。兄弟リストの片方に
/// だけ数値以外の要素があっても、配列全体がテキストに解決される。
pub(crate) fn resolve(policy: Policy, groups: &[(&'static str, &[Value])]) -> Result<DType> {
    let mut saw_float = false;
    for &(argument, values) in groups {
        for (index, value) in values.iter().enumerate() {
            match (policy, classify::classify(value)) {
                (_, Class::Int) => {}
                (Policy::IntOnly, _) => {
                    return Err(ConstructError::ElementMismatch {
                        argument,
                        index,
                        policy,
                        found: classify::describe(value),
                    });
                }
                (_, Class::Float) => saw_float = true,
                (Policy::FloatPermissive, Class::Other) => {
                    return Err(ConstructError::ElementMismatch {
                        argument,
                        index,
                        policy,
                        found: classify::describe(value),
                    });
                }
                (Policy::Unconstrained, Class::Other) => {
                    log::debug!(
                        "`{argument}[{index}]` is not numeric; resolving the whole array to fixed-width text"
                    );
                    return Ok(DType::Str);
                }
            }
        }
    }
    Ok(match policy {
        Policy::IntOnly => DType::I64,
        Policy::FloatPermissive => DType::F64,
        Policy::Unconstrained => {
            if saw_float {
                DType::F64
            } else {
                DType::I64
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        v.as_array().unwrap().clone()
    }

    #[test]
    fn test_int_only_accepts_ints() {
        let vs = values(json!([1, -2, 3]));
        let dtype = resolve(Policy::IntOnly, &[("values", &vs)]).unwrap();
        assert_eq!(dtype, DType::I64);
    }

    #[test]
    fn test_int_only_rejects_float() {
        let vs = values(json!([1, 2.5]));
        let e = resolve(Policy::IntOnly, &[("values", &vs)]).unwrap_err();
        assert!(matches!(
            e,
            ConstructError::ElementMismatch { argument: "values", index: 1, .. }
        ));
    }

    #[test]
    fn test_float_permissive_promotes_ints() {
        // 全要素が整数でも結果は float64
        let vs = values(json!([1, 2, 3]));
        assert_eq!(
            resolve(Policy::FloatPermissive, &[("values", &vs)]).unwrap(),
            DType::F64
        );
    }

    #[test]
    fn test_float_permissive_rejects_text() {
        let vs = values(json!([1.5, "2.5"]));
        let e = resolve(Policy::FloatPermissive, &[("values", &vs)]).unwrap_err();
        assert!(matches!(e, ConstructError::ElementMismatch { index: 1, .. }));
    }

    #[test]
    fn test_unconstrained_all_int() {
        let a = values(json!([1, 2]));
        let b = values(json!([3, 4]));
        let dtype = resolve(Policy::Unconstrained, &[("left", &a), ("right", &b)]).unwrap();
        assert_eq!(dtype, DType::I64);
    }

    #[test]
    fn test_unconstrained_mixed_numeric() {
        let a = values(json!([1, 2]));
        let b = values(json!([3, 4.5]));
        let dtype = resolve(Policy::Unconstrained, &[("left", &a), ("right", &b)]).unwrap();
        assert_eq!(dtype, DType::F64);
    }

    #[test]
    fn test_unconstrained_falls_back_to_text() {
        // 片方のリストの 1 要素だけで全体がテキストになる
        let a = values(json!([1, 2, 3.8]));
        let b = values(json!([4, "five", 6.3]));
        let dtype = resolve(Policy::Unconstrained, &[("left", &a), ("right", &b)]).unwrap();
        assert_eq!(dtype, DType::Str);
    }

    #[test]
    fn test_empty_groups() {
        let vs: Vec<Value> = vec![];
        assert_eq!(resolve(Policy::IntOnly, &[("values", &vs)]).unwrap(), DType::I64);
        assert_eq!(
            resolve(Policy::FloatPermissive, &[("values", &vs)]).unwrap(),
            DType::F64
        );
        assert_eq!(
            resolve(Policy::Unconstrained, &[("values", &vs)]).unwrap(),
            DType::I64
        );
    }
}

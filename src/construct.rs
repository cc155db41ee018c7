//! 構築エントリポイント
//!
//! 公開コンストラクタ群。各エントリポイントは
//! 構造検査 → 要素分類・型解決 → バックエンド確保 の薄い合成で、
//! いずれかの検査に失敗した場合はバックエンドに触れる前に返ります。
//! 成功した呼び出しの結果は呼び出し元が完全に所有し、このクレートが
//! 参照を保持し続けることはありません。

use ndarray::{ArrayD, Axis, IxDyn};
use serde_json::Value;

use crate::arity;
use crate::array::{Backing, DType, TypedArray};
use crate::classify;
use crate::error::{ConstructError, Result};
use crate::policy::{self, Policy};

impl TypedArray {
    /// 0 次元の整数スカラー配列を構築する
    ///
    /// 厳密に整数である値だけを受け付ける。`3.0` や `"3"` は通らない。
    ///
    /// ```
    /// use serde_json::json;
    /// use varray::TypedArray;
    ///
    /// let a = TypedArray::from_int_scalar(&json!(42))?;
    /// assert_eq!(a.shape(), &[] as &[usize]);
    /// assert_eq!(a.dtype().name(), "int64");
    /// # Ok::<(), varray::ConstructError>(())
    /// ```
    pub fn from_int_scalar(value: &Value) -> Result<Self> {
        let v = arity::expect_int(value, "value")?;
        Ok(Self::new(Backing::I64(ArrayD::from_elem(IxDyn(&[]), v))))
    }

    /// 連番 `[0, item_count)` を `[axis_count, elements_per_axis]` に
    /// 整形した int64 配列を構築する
    ///
    /// 3 つの引数はそれぞれ独立に厳密な整数・非負でなければならない。
    /// `item_count != axis_count * elements_per_axis` の場合は
    /// バックエンドの reshape 失敗がそのまま返る。
    pub fn from_range(
        item_count: &Value,
        axis_count: &Value,
        elements_per_axis: &Value,
    ) -> Result<Self> {
        let item_count = arity::expect_count(item_count, "item_count")?;
        let axis_count = arity::expect_count(axis_count, "axis_count")?;
        let elements_per_axis = arity::expect_count(elements_per_axis, "elements_per_axis")?;
        log::trace!(
            "building a {axis_count}x{elements_per_axis} range array of {item_count} elements"
        );
        let data: Vec<i64> = (0..item_count as i64).collect();
        let array = ArrayD::from_shape_vec(IxDyn(&[axis_count, elements_per_axis]), data)?;
        Ok(Self::new(Backing::I64(array)))
    }

    /// 整数のみのフラットなリストから 1 次元 int64 配列を構築する
    ///
    /// 要素が 1 つでも整数以外なら呼び出し全体が失敗する。
    /// 部分的な配列は作られない。
    pub fn from_int_list(values: &Value) -> Result<Self> {
        let values = arity::expect_sequence(values, "values")?;
        policy::resolve(Policy::IntOnly, &[("values", values)])?;
        let data = collect_i64("values", values, Policy::IntOnly)?;
        let array = ArrayD::from_shape_vec(IxDyn(&[values.len()]), data)?;
        Ok(Self::new(Backing::I64(array)))
    }

    /// 数値のフラットなリストから 1 次元 float64 配列を構築する
    ///
    /// 整数は浮動小数点数として受け入れられる。逆方向の昇格はない。
    /// 入力がすべて整数でも結果の要素型は float64。
    pub fn from_float_list(values: &Value) -> Result<Self> {
        let values = arity::expect_sequence(values, "values")?;
        policy::resolve(Policy::FloatPermissive, &[("values", values)])?;
        let data = collect_f64("values", values, Policy::FloatPermissive)?;
        let array = ArrayD::from_shape_vec(IxDyn(&[values.len()]), data)?;
        Ok(Self::new(Backing::F64(array)))
    }

    /// 任意の要素を持つ 2 本の兄弟リストから `[2, len]` の 2 次元配列を
    /// 構築する
    ///
    /// 要素型は両リストの合併から解決される。すべて整数なら int64、
    /// 浮動小数点数が混ざれば float64、数値以外の要素が 1 つでもあれば
    /// 全要素を文字列化した固定長テキストになる。要素は再型付けされる
    /// だけで失われない。
    ///
    /// ```
    /// use serde_json::json;
    /// use varray::{DType, TypedArray};
    ///
    /// let a = TypedArray::from_pair(&json!([1, 2, 3.8]), &json!([4, "five", 6.3]))?;
    /// assert_eq!(a.dtype(), DType::Str);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// # Ok::<(), varray::ConstructError>(())
    /// ```
    pub fn from_pair(left: &Value, right: &Value) -> Result<Self> {
        let a = arity::expect_sequence(left, "left")?;
        let b = arity::expect_sequence(right, "right")?;
        arity::expect_same_length(a, b)?;
        let dtype = policy::resolve(Policy::Unconstrained, &[("left", a), ("right", b)])?;
        let shape = IxDyn(&[2, a.len()]);
        match dtype {
            DType::I64 => {
                let mut data = collect_i64("left", a, Policy::Unconstrained)?;
                data.extend(collect_i64("right", b, Policy::Unconstrained)?);
                Ok(Self::new(Backing::I64(ArrayD::from_shape_vec(shape, data)?)))
            }
            DType::F64 => {
                let mut data = collect_f64("left", a, Policy::Unconstrained)?;
                data.extend(collect_f64("right", b, Policy::Unconstrained)?);
                Ok(Self::new(Backing::F64(ArrayD::from_shape_vec(shape, data)?)))
            }
            DType::Str => {
                let mut data = collect_text(a);
                data.extend(collect_text(b));
                Ok(Self::from_text(ArrayD::from_shape_vec(shape, data)?))
            }
        }
    }

    /// 数値の 2 本の兄弟リストから `[2, len]` の float64 配列を構築する
    ///
    /// 両リストの全要素が整数か浮動小数点数でなければならない。
    pub fn from_float_pair(left: &Value, right: &Value) -> Result<Self> {
        let a = arity::expect_sequence(left, "left")?;
        let b = arity::expect_sequence(right, "right")?;
        arity::expect_same_length(a, b)?;
        policy::resolve(Policy::FloatPermissive, &[("left", a), ("right", b)])?;
        let mut data = collect_f64("left", a, Policy::FloatPermissive)?;
        data.extend(collect_f64("right", b, Policy::FloatPermissive)?);
        let array = ArrayD::from_shape_vec(IxDyn(&[2, a.len()]), data)?;
        Ok(Self::new(Backing::F64(array)))
    }

    /// バックエンドネイティブ配列をそのまま包む
    ///
    /// 要素型は入力配列から変わらない。検証済みのデータを受け取るための
    /// 入口で、生のシーケンスはここを通れない。
    pub fn from_native<T>(array: ArrayD<T>) -> Self
    where
        Self: From<ArrayD<T>>,
    {
        Self::from(array)
    }

    /// 2 次元 float64 配列の列を新しい先頭軸で積み上げ、3 次元配列を
    /// 構築する
    ///
    /// すべての入力が同じ形状の 2 次元 float64 配列でなければならない。
    /// 次元数や要素型が合わない入力が 1 つでもあれば呼び出し全体が
    /// 失敗する。
    pub fn from_stack(arrays: &[TypedArray]) -> Result<Self> {
        if arrays.is_empty() {
            return Err(ConstructError::EmptyStack);
        }
        let mut views = Vec::with_capacity(arrays.len());
        for (index, array) in arrays.iter().enumerate() {
            match array.as_f64() {
                Some(data) if array.ndim() == 2 => views.push(data.view()),
                _ => {
                    return Err(ConstructError::NotStackable {
                        index,
                        ndim: array.ndim(),
                        dtype: array.dtype(),
                    });
                }
            }
        }
        let stacked = ndarray::stack(Axis(0), &views)?;
        Ok(Self::new(Backing::F64(stacked)))
    }
}

fn collect_i64(argument: &'static str, values: &[Value], policy: Policy) -> Result<Vec<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| classify::element_to_i64(value, argument, index, policy))
        .collect()
}

fn collect_f64(argument: &'static str, values: &[Value], policy: Policy) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| classify::element_to_f64(value, argument, index, policy))
        .collect()
}

fn collect_text(values: &[Value]) -> Vec<String> {
    values.iter().map(classify::stringify).collect()
}

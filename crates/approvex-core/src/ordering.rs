//! Total ordering over heterogeneous JSON values
//!
//! Real capture batches mix types freely under the same field, so the
//! sort comparator needs an order that is total over every pair of JSON
//! values. Types rank `Null < Bool < Number < String < Array < Object`;
//! within a type the order is the natural one. An absent field orders
//! below every present value, including an explicit null.

use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// Compare two optional field values, with absence ordered lowest
pub fn field_cmp(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => value_cmp(x, y),
    }
}

/// Compare two JSON values under the canonical total order
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => array_cmp(x, y),
        (Value::Object(x), Value::Object(y)) => object_cmp(x, y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Numeric comparison by exact value across representations
///
/// Integers widen to `i128`, which holds the full `i64` and `u64`
/// ranges. An integer against a float compares integer parts first and
/// lets the fractional remainder break the tie, so values beyond f64's
/// 2^53 integer precision are never collapsed by rounding. Float pairs
/// use `total_cmp` with negative zero normalized, which keeps zero
/// equal across all three representations. Every branch computes the
/// order of the exact numeric values, so the relation is transitive.
fn number_cmp(a: &Number, b: &Number) -> Ordering {
    match (int_value(a), int_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => int_float_cmp(x, float_value(b)),
        (None, Some(y)) => int_float_cmp(y, float_value(a)).reverse(),
        (None, None) => float_value(a).total_cmp(&float_value(b)),
    }
}

fn int_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

// Only reached for float-represented numbers, which serde_json keeps
// finite; -0.0 collapses to 0.0 so the float and integer views of zero
// agree.
fn float_value(n: &Number) -> f64 {
    let v = n.as_f64().unwrap_or(0.0);
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn int_float_cmp(x: i128, y: f64) -> Ordering {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    const NEG_TWO_POW_63: f64 = -9_223_372_036_854_775_808.0;

    // x is in [-2^63, 2^64); a float outside that window decides outright.
    if y >= TWO_POW_64 {
        return Ordering::Less;
    }
    if y < NEG_TWO_POW_63 {
        return Ordering::Greater;
    }

    let truncated = y.trunc();
    match x.cmp(&(truncated as i128)) {
        Ordering::Equal if y > truncated => Ordering::Less,
        Ordering::Equal if y < truncated => Ordering::Greater,
        ordering => ordering,
    }
}

/// Element-wise comparison, shorter array first on a shared prefix
fn array_cmp(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = value_cmp(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// Entry-wise comparison over key-sorted entries, fewer entries first
fn object_cmp(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    let mut lhs: Vec<(&String, &Value)> = a.iter().collect();
    let mut rhs: Vec<(&String, &Value)> = b.iter().collect();
    lhs.sort_by(|l, r| l.0.cmp(r.0));
    rhs.sort_by(|l, r| l.0.cmp(r.0));

    for ((ka, va), (kb, vb)) in lhs.iter().zip(rhs.iter()) {
        let ord = ka.cmp(kb).then_with(|| value_cmp(va, vb));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    lhs.len().cmp(&rhs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_rank_ladder() {
        let ladder = [
            json!(null),
            json!(false),
            json!(42),
            json!("text"),
            json!([1]),
            json!({"k": 1}),
        ];
        for window in ladder.windows(2) {
            assert_eq!(
                value_cmp(&window[0], &window[1]),
                Ordering::Less,
                "{:?} should order below {:?}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_bool_order() {
        assert_eq!(value_cmp(&json!(false), &json!(true)), Ordering::Less);
        assert_eq!(value_cmp(&json!(true), &json!(true)), Ordering::Equal);
    }

    #[test]
    fn test_integer_order_is_exact() {
        assert_eq!(value_cmp(&json!(-3), &json!(2)), Ordering::Less);
        assert_eq!(value_cmp(&json!(10), &json!(10)), Ordering::Equal);
        // Beyond f64's 2^53 integer precision, i64 comparison stays exact.
        assert_eq!(
            value_cmp(&json!(9_007_199_254_740_993_i64), &json!(9_007_199_254_740_992_i64)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_numeric_representations() {
        assert_eq!(value_cmp(&json!(1), &json!(1.0)), Ordering::Equal);
        assert_eq!(value_cmp(&json!(1.5), &json!(2)), Ordering::Less);
        assert_eq!(value_cmp(&json!(-0.5), &json!(0)), Ordering::Less);
        assert_eq!(
            value_cmp(&json!(u64::MAX), &json!(i64::MAX)),
            Ordering::Greater
        );
        // Straddling 2^53: the integer operand keeps its exact value
        // instead of rounding to the float's precision.
        assert_eq!(
            value_cmp(
                &json!(9_007_199_254_740_993_i64),
                &json!(9_007_199_254_740_992.0)
            ),
            Ordering::Greater
        );
        assert_eq!(
            value_cmp(
                &json!(9_007_199_254_740_992_i64),
                &json!(9_007_199_254_740_992.0)
            ),
            Ordering::Equal
        );
        assert_eq!(
            value_cmp(
                &json!(9_007_199_254_740_993_i64),
                &json!(9_007_199_254_740_994.0)
            ),
            Ordering::Less
        );
        assert_eq!(value_cmp(&json!(-0.0), &json!(0)), Ordering::Equal);
    }

    #[test]
    fn test_numeric_order_is_transitive_across_representations() {
        // Values straddling f64's 2^53 integer precision, in mixed
        // integer and float encodings, plus both encodings of zero.
        let values = [
            json!(9_007_199_254_740_992_i64),
            json!(9_007_199_254_740_993_i64),
            json!(9_007_199_254_740_992.0),
            json!(9_007_199_254_740_994.0),
            json!(0),
            json!(-0.0),
            json!(0.5),
        ];
        for a in &values {
            for b in &values {
                for c in &values {
                    if value_cmp(a, b) != Ordering::Greater
                        && value_cmp(b, c) != Ordering::Greater
                    {
                        assert_ne!(
                            value_cmp(a, c),
                            Ordering::Greater,
                            "{:?} <= {:?} and {:?} <= {:?}, so {:?} must not exceed {:?}",
                            a,
                            b,
                            b,
                            c,
                            a,
                            c
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_string_order_is_bytewise() {
        assert_eq!(value_cmp(&json!("a"), &json!("b")), Ordering::Less);
        // Byte-wise, not numeric-aware: "10" sorts before "9".
        assert_eq!(value_cmp(&json!("10"), &json!("9")), Ordering::Less);
    }

    #[test]
    fn test_array_prefix_order() {
        assert_eq!(value_cmp(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
        assert_eq!(value_cmp(&json!([1]), &json!([1, 0])), Ordering::Less);
        assert_eq!(value_cmp(&json!([]), &json!([null])), Ordering::Less);
    }

    #[test]
    fn test_object_order_by_sorted_entries() {
        // Differing keys decide before values.
        assert_eq!(
            value_cmp(&json!({"a": 9}), &json!({"b": 0})),
            Ordering::Less
        );
        // Same keys fall through to value comparison.
        assert_eq!(
            value_cmp(&json!({"a": 1}), &json!({"a": 2})),
            Ordering::Less
        );
        // Shared sorted prefix, fewer entries first.
        assert_eq!(
            value_cmp(&json!({"a": 1}), &json!({"a": 1, "b": 2})),
            Ordering::Less
        );
    }

    #[test]
    fn test_object_order_ignores_construction_order() {
        let mut forward = Map::new();
        forward.insert("a".to_string(), json!(1));
        forward.insert("b".to_string(), json!(2));

        let mut reverse = Map::new();
        reverse.insert("b".to_string(), json!(2));
        reverse.insert("a".to_string(), json!(1));

        assert_eq!(
            value_cmp(&Value::Object(forward), &Value::Object(reverse)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_field_cmp_orders_absent_below_null() {
        let null = json!(null);
        assert_eq!(field_cmp(None, Some(&null)), Ordering::Less);
        assert_eq!(field_cmp(Some(&null), None), Ordering::Greater);
        assert_eq!(field_cmp(None, None), Ordering::Equal);
    }

    #[test]
    fn test_order_is_antisymmetric() {
        let values = [
            json!(null),
            json!(true),
            json!(-7),
            json!(3.25),
            json!("zz"),
            json!([1, {"k": null}]),
            json!({"nested": {"deep": [false]}}),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(value_cmp(a, b), value_cmp(b, a).reverse());
            }
        }
    }
}

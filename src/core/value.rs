use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::{PrimerError, Result};

/// Dynamically-typed primitive.
///
/// Equality follows "same value zero" semantics so a `Value` can be used as a
/// collection key: `NaN` equals `NaN`, `0.0` equals `-0.0`, and integers never
/// equal floats (`Integer(1) != Float(1.0)`).
///
/// Serialized untagged, so JSON cannot carry every float: `NaN` and the
/// infinities serialize as `null` and come back as [`Value::Null`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            // ========================================
            // Null sorts after every other value
            // ========================================
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Null, _) => Ok(Ordering::Greater),
            (_, Value::Null) => Ok(Ordering::Less),

            // ========================================
            // Same type comparisons
            // ========================================
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Ok(compare_floats(*a, *b)),
            (Value::Text(a), Value::Text(b)) => Ok(a.cmp(b)),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),

            // ========================================
            // Mixed numeric types (implicit coercion)
            // ========================================
            (Value::Integer(a), Value::Float(b)) => Ok(compare_integer_float(*a, *b)),
            (Value::Float(a), Value::Integer(b)) => Ok(compare_integer_float(*b, *a).reverse()),

            _ => Err(PrimerError::TypeMismatch(format!(
                "Cannot compare incompatible types: {} and {}",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    /// Adds two values. Integer overflow is an error rather than a wrap.
    pub fn checked_add(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_add(*b)
                .map(Value::Integer)
                .ok_or_else(|| PrimerError::Overflow(format!("{} + {} overflows i64", a, b))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::Integer(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
            (Value::Float(a), Value::Integer(b)) => Ok(Value::Float(a + *b as f64)),
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{}{}", a, b))),
            _ => Err(PrimerError::TypeMismatch(format!(
                "Cannot add {} and {}",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Text(_) => "TEXT",
            Self::Boolean(_) => "BOOLEAN",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

// NaN is equal to NaN and greater than every other float
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// Exact: no rounding of the integer through f64
fn compare_integer_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above i64::MAX
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() || f >= I64_END {
        return Ordering::Less;
    }
    if f < -I64_END {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    }
}

fn canonical_float_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0.0f64.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Null => 0u8.hash(state),
            Self::Integer(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            Self::Float(f) => {
                2u8.hash(state);
                canonical_float_bits(*f).hash(state);
            }
            Self::Text(s) => {
                3u8.hash(state);
                s.hash(state);
            }
            Self::Boolean(b) => {
                4u8.hash(state);
                b.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_eq!(Value::Float(3.5), Value::Float(3.5));
        assert_ne!(Value::Integer(1), Value::Integer(2));
        assert_ne!(Value::Integer(1), Value::Float(1.0));
    }

    #[test]
    fn test_nan_and_signed_zero_are_same_key() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(hash_of(&Value::Float(f64::NAN)), hash_of(&Value::Float(-f64::NAN)));

        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_eq!(hash_of(&Value::Float(0.0)), hash_of(&Value::Float(-0.0)));
    }

    #[test]
    fn test_compare() {
        assert_eq!(Value::Integer(1).compare(&Value::Integer(2)).unwrap(), Ordering::Less);
        assert_eq!(Value::Integer(2).compare(&Value::Float(1.5)).unwrap(), Ordering::Greater);
        assert_eq!(Value::from("a").compare(&Value::from("b")).unwrap(), Ordering::Less);
        assert_eq!(Value::Null.compare(&Value::Integer(0)).unwrap(), Ordering::Greater);

        let err = Value::from("a").compare(&Value::Integer(1)).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_compare_integer_float_is_exact() {
        let big = 9_007_199_254_740_992i64; // 2^53
        let float = Value::Float(big as f64);

        assert_eq!(Value::Integer(big + 1).compare(&float).unwrap(), Ordering::Greater);
        assert_eq!(float.compare(&Value::Integer(big + 1)).unwrap(), Ordering::Less);
        assert_eq!(Value::Integer(big).compare(&float).unwrap(), Ordering::Equal);

        assert_eq!(Value::Integer(2).compare(&Value::Float(2.5)).unwrap(), Ordering::Less);
        assert_eq!(Value::Integer(-2).compare(&Value::Float(-2.5)).unwrap(), Ordering::Greater);
        assert_eq!(Value::Integer(i64::MAX).compare(&Value::Float(9.3e18)).unwrap(), Ordering::Less);
        assert_eq!(Value::Integer(i64::MIN).compare(&Value::Float(-9.3e18)).unwrap(), Ordering::Greater);
        assert_eq!(Value::Integer(i64::MIN).compare(&Value::Float(i64::MIN as f64)).unwrap(), Ordering::Equal);
        assert_eq!(Value::Integer(0).compare(&Value::Float(f64::NAN)).unwrap(), Ordering::Less);
        assert_eq!(Value::Float(f64::NEG_INFINITY).compare(&Value::Integer(0)).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_json_round_trip() {
        let values = vec![
            Value::Null,
            Value::Integer(36),
            Value::Float(1.5),
            Value::from("A"),
            Value::Boolean(true),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,36,1.5,"A",true]"#);

        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_json_non_finite_floats_become_null() {
        for float in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let json = serde_json::to_string(&Value::Float(float)).unwrap();
            assert_eq!(json, "null");

            let back: Value = serde_json::from_str(&json).unwrap();
            assert!(back.is_null());
        }
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Value::Integer(2).checked_add(&Value::Integer(3)).unwrap(), Value::Integer(5));
        assert_eq!(Value::Integer(2).checked_add(&Value::Float(0.5)).unwrap(), Value::Float(2.5));
        assert_eq!(Value::from("ab").checked_add(&Value::from("cd")).unwrap(), Value::from("abcd"));

        assert!(matches!(
            Value::Integer(i64::MAX).checked_add(&Value::Integer(1)),
            Err(PrimerError::Overflow(_))
        ));
        assert!(Value::Boolean(true).checked_add(&Value::Integer(1)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(36).to_string(), "36");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("A").to_string(), "A");
    }
}

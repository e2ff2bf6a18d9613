//! Native numeric encodings.
//!
//! Parsers that keep strict number types usually remember how a number was
//! written: as a small signed integer, a wide unsigned one, or a float. This
//! module names that closed set so adapters can report and copy numbers
//! without losing the distinction.

/// A number in the most specific encoding that can hold it.
///
/// Classification order is `Int32`, `Uint32`, `Int64`, `Uint64`, and only
/// then `Double`.
#[derive(Debug, Clone, Copy)]
pub enum NativeNumber {
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Double(f64),
}

impl NativeNumber {
    /// Classify a signed integer.
    pub fn from_i64(n: i64) -> Self {
        if let Ok(v) = i32::try_from(n) {
            NativeNumber::Int32(v)
        } else if let Ok(v) = u32::try_from(n) {
            NativeNumber::Uint32(v)
        } else {
            NativeNumber::Int64(n)
        }
    }

    /// Classify an unsigned integer.
    pub fn from_u64(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(v) => Self::from_i64(v),
            Err(_) => NativeNumber::Uint64(n),
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, NativeNumber::Double(_))
    }

    /// Widen to `i64`.
    ///
    /// Encodings are tried in the order int32, int64, uint32, uint64. A
    /// `Uint64` above `i64::MAX` does not fit and yields `None` instead of
    /// wrapping; so does any `Double`.
    pub fn to_i64(&self) -> Option<i64> {
        match *self {
            NativeNumber::Int32(v) => Some(i64::from(v)),
            NativeNumber::Int64(v) => Some(v),
            NativeNumber::Uint32(v) => Some(i64::from(v)),
            NativeNumber::Uint64(v) => i64::try_from(v).ok(),
            NativeNumber::Double(_) => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            NativeNumber::Int32(v) => f64::from(v),
            NativeNumber::Uint32(v) => f64::from(v),
            NativeNumber::Int64(v) => v as f64,
            NativeNumber::Uint64(v) => v as f64,
            NativeNumber::Double(v) => v,
        }
    }

    fn to_i128(self) -> Option<i128> {
        match self {
            NativeNumber::Int32(v) => Some(i128::from(v)),
            NativeNumber::Uint32(v) => Some(i128::from(v)),
            NativeNumber::Int64(v) => Some(i128::from(v)),
            NativeNumber::Uint64(v) => Some(i128::from(v)),
            NativeNumber::Double(_) => None,
        }
    }

    /// Compare by numeric value, ignoring the encoding.
    ///
    /// Two integers compare exactly. Anything involving a `Double` compares
    /// as `f64`.
    pub fn value_eq(&self, other: &NativeNumber) -> bool {
        match (self.to_i128(), other.to_i128()) {
            (Some(a), Some(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialEq for NativeNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl From<i64> for NativeNumber {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<u64> for NativeNumber {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<f64> for NativeNumber {
    fn from(n: f64) -> Self {
        NativeNumber::Double(n)
    }
}

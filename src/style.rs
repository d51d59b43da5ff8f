//! A trivial transform used to compare assertion styles in tests.

use core::fmt;

/// Returns a copy of `input` with every value incremented by one.
///
/// `None` stays `None` and an empty slice yields an empty vector; the input
/// is never touched. Increments wrap at `i32::MAX`.
pub fn increment(input: Option<&[i32]>) -> Option<Vec<i32>> {
    let input = input?;
    Some(input.iter().map(|v| v.wrapping_add(1)).collect())
}

/// Integer sequence with a hand-written equality check, for comparison with
/// the derived one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntSlice(pub Vec<i32>);

impl IntSlice {
    pub fn equal(&self, other: &IntSlice) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl From<Vec<i32>> for IntSlice {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl From<Option<Vec<i32>>> for IntSlice {
    fn from(values: Option<Vec<i32>>) -> Self {
        Self(values.unwrap_or_default())
    }
}

impl fmt::Display for IntSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

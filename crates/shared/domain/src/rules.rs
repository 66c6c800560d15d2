use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Represents a set of ASCII character classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CharClasses: u32 {
        const UPPER = 1 << 0;
        const LOWER = 1 << 1;
        const DIGIT = 1 << 2;

        const ALL = Self::UPPER.bits() | Self::LOWER.bits() | Self::DIGIT.bits();
    }
}

impl CharClasses {
    /// Classifies a single character. Non-ASCII input maps to the empty set.
    #[must_use]
    pub const fn of(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            Self::UPPER
        } else if ch.is_ascii_lowercase() {
            Self::LOWER
        } else if ch.is_ascii_digit() {
            Self::DIGIT
        } else {
            Self::empty()
        }
    }

    /// Returns the union of the classes present in `input`.
    #[must_use]
    pub fn scan(input: &str) -> Self {
        let mut present = Self::empty();
        for ch in input.chars() {
            present |= Self::of(ch);
            if present.contains(Self::ALL) {
                break;
            }
        }
        present
    }

    /// Human-readable names for every class in the set, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(Self::UPPER) {
            out.push("uppercase letter");
        }
        if self.contains(Self::LOWER) {
            out.push("lowercase letter");
        }
        if self.contains(Self::DIGIT) {
            out.push("digit");
        }
        out
    }
}

impl From<&str> for CharClasses {
    fn from(s: &str) -> Self {
        match s {
            "upper" => Self::UPPER,
            "lower" => Self::LOWER,
            "digit" => Self::DIGIT,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CharClasses {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for CharClasses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CharClasses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Length bounds shared by the username and password rules.
///
/// Bounds are counted in `char`s so multibyte input cannot skew a boundary
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl LengthBounds {
    /// Returns `true` if `count` falls inside the inclusive bounds.
    #[must_use]
    pub const fn admits(&self, count: usize) -> bool {
        count >= self.min_chars && count <= self.max_chars
    }
}

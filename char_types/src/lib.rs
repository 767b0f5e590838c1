//! # Char Types
//!
//! This crate defines a validated single-byte character value type.
//!
//! ## Philosophy
//!
//! - **Validated at the boundary**: a `Char` cannot exist outside its range
//! - **Values, not coercion**: out-of-range input fails, it is never clamped
//! - **Explicit, not ambient**: the range mode is a constructor argument
//! - **Testable**: values are serializable and compare as plain integers
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Multi-byte or Unicode code-point handling
//! - A string-processing library (the single [`join()`] helper aside)
//! - An I/O or persistence layer
//!
//! ## Core Concepts
//!
//! - [`Char`]: a single-byte character that behaves as an integer
//! - [`RangeMode`]: strict 7-bit ASCII range vs. non-strict signed/unsigned byte range
//! - [`Char::signed`] / [`Char::unsigned`]: bit-pattern-preserving reinterpretation views
//! - [`join()`]: concatenation of a sequence of `Char` values into a string

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod join;

pub use error::CharError;
pub use join::{join, join_chars, JoinItem};

/// Valid range selected at construction time
///
/// The mode is configuration for a single construction call, not per-instance
/// state: a constructed [`Char`] does not remember which mode produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeMode {
    /// 7-bit ASCII, 0..=127
    Strict,
    /// Signed/unsigned byte reinterpretation, -128..=255
    NonStrict,
}

impl RangeMode {
    /// Smallest valid value for this mode
    pub fn min(self) -> i64 {
        match self {
            RangeMode::Strict => 0,
            RangeMode::NonStrict => -128,
        }
    }

    /// Largest valid value for this mode
    pub fn max(self) -> i64 {
        match self {
            RangeMode::Strict => 127,
            RangeMode::NonStrict => 255,
        }
    }

    /// Checks if a value lies in this mode's closed range
    pub fn contains(self, value: i64) -> bool {
        self.min() <= value && value <= self.max()
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeMode::Strict => write!(f, "strict"),
            RangeMode::NonStrict => write!(f, "non-strict"),
        }
    }
}

/// A single-byte character that behaves as an integer
///
/// Every live `Char` lies in -128..=255; strict construction additionally
/// guarantees 0..=127. The stored integer is exactly the validated input,
/// never normalized, so a non-strict `Char` keeps the signed or unsigned
/// form it was produced with. [`Char::signed`] and [`Char::unsigned`]
/// switch between the two forms without changing the underlying bit pattern.
///
/// Equality, ordering, and hashing all delegate to the stored integer.
///
/// Serialization re-validates on the way in: a serialized `Char` is its raw
/// integer, and deserializing an integer outside -128..=255 fails.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Char(i16);

impl Char {
    /// The NUL character
    pub const NUL: Char = Char(0);

    /// Creates the NUL character
    pub fn new() -> Self {
        Self::NUL
    }

    /// Creates a `Char` from an integer, validated against the mode's range
    ///
    /// The stored value is the input unmodified; a negative non-strict input
    /// stays negative.
    pub fn from_int(value: i64, mode: RangeMode) -> Result<Self, CharError> {
        if mode.contains(value) {
            Ok(Self(value as i16))
        } else {
            Err(CharError::OutOfRange {
                value,
                min: mode.min(),
                max: mode.max(),
            })
        }
    }

    /// Creates a `Char` from a float, truncating toward zero first
    ///
    /// NaN and infinities have no integer part and are rejected.
    pub fn from_float(value: f64, mode: RangeMode) -> Result<Self, CharError> {
        if !value.is_finite() {
            return Err(CharError::NonFinite(value));
        }
        Self::from_int(value.trunc() as i64, mode)
    }

    /// Creates a `Char` from single-character text
    ///
    /// The text must be exactly one character, and that character must
    /// encode to a single byte (i.e. be ASCII). Length is counted in
    /// characters, not bytes, so a two-character error is reported even
    /// when the input is two multi-byte characters.
    pub fn from_text(text: &str) -> Result<Self, CharError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CharError::WrongLength(text.chars().count())),
        }
    }

    /// The signed view: 128..=255 maps down to -128..=-1, the rest is unchanged
    ///
    /// Idempotent, and a no-op on the strict range 0..=127.
    pub fn signed(self) -> Self {
        if self.0 > 127 {
            Self(self.0 - 256)
        } else {
            self
        }
    }

    /// The unsigned view: -128..=-1 maps up to 128..=255, the rest is unchanged
    ///
    /// Idempotent, and a no-op on the strict range 0..=127.
    pub fn unsigned(self) -> Self {
        if self.0 < 0 {
            Self(self.0 + 256)
        } else {
            self
        }
    }

    /// The raw stored integer
    pub fn value(self) -> i16 {
        self.0
    }

    /// The unsigned bit pattern as a byte
    pub fn as_byte(self) -> u8 {
        self.unsigned().0 as u8
    }

    /// The character for the unsigned value
    ///
    /// Negative values render as their 128..=255 counterpart's character.
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    /// Checks if the value lies in the strict ASCII range 0..=127
    pub fn is_ascii(self) -> bool {
        (0..=127).contains(&self.0)
    }
}

impl fmt::Display for Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Debug for Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.as_char();
        // Negative values and characters that only render escaped show the
        // raw integer; everything else shows the character itself.
        if self.0 < 0 || c.escape_debug().next() == Some('\\') {
            write!(f, "Char({})", self.0)
        } else {
            write!(f, "Char('{}')", c)
        }
    }
}

impl TryFrom<char> for Char {
    type Error = CharError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.len_utf8() == 1 {
            Ok(Self(c as i16))
        } else {
            Err(CharError::NonAscii(c))
        }
    }
}

/// Non-strict validation; also the deserialization gate.
impl TryFrom<i16> for Char {
    type Error = CharError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_int(i64::from(value), RangeMode::NonStrict)
    }
}

impl std::str::FromStr for Char {
    type Err = CharError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<Char> for i16 {
    fn from(c: Char) -> Self {
        c.0
    }
}

impl From<Char> for i32 {
    fn from(c: Char) -> Self {
        i32::from(c.0)
    }
}

impl From<Char> for i64 {
    fn from(c: Char) -> Self {
        i64::from(c.0)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// 8-bit sRGB color as stored in the catalog (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> TimelineResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TimelineError::InvalidData(format!(
                "color `{input}` must be a `#rrggbb` hex triplet"
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|err| TimelineError::InvalidData(format!("color `{input}`: {err}")))?;
        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Shifts every channel by `amount`, saturating at 0 and 255.
    #[must_use]
    pub fn adjusted(self, amount: i16) -> Self {
        let shift = |channel: u8| (i16::from(channel) + amount).clamp(0, 255) as u8;
        Self::new(shift(self.red), shift(self.green), shift(self.blue))
    }

    /// Perceived luminance in `0..=1`.
    #[must_use]
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.red) + 0.587 * f64::from(self.green) + 0.114 * f64::from(self.blue))
            / 255.0
    }

    /// Black on light backgrounds, white on dark ones.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.luminance() > 0.5 {
            Self::new(0, 0, 0)
        } else {
            Self::new(255, 255, 255)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = TimelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

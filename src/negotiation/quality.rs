use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Quality-factor grammar shared by `Accept` and `Accept-Language`.
///
/// Accepts `1`, `1.`, `1.0`, `1.00`, `1.000` and `0.` followed by up to two
/// digits and a final non-zero digit. Zero is not an accepted factor.
pub(crate) const QUALITY_FACTOR: &str = r"1(?:\.0{0,3})?|0\.[0-9]{0,2}[1-9]";

static QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{QUALITY_FACTOR})$")).expect("QUALITY: invalid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid quality factor `{0}`")]
pub struct InvalidQuality(pub String);

/// A quality factor in thousandths, `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QValue(u16);

impl QValue {
    pub const MAX: QValue = QValue(1000);

    /// The factor in thousandths.
    pub fn thousandths(self) -> u16 {
        self.0
    }
}

impl Default for QValue {
    fn default() -> Self {
        QValue::MAX
    }
}

impl FromStr for QValue {
    type Err = InvalidQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !QUALITY.is_match(s) {
            return Err(InvalidQuality(s.to_string()));
        }

        match s.strip_prefix("0.") {
            Some(fraction) => {
                let thousandths = fraction
                    .bytes()
                    .chain(std::iter::repeat(b'0'))
                    .take(3)
                    .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
                Ok(QValue(thousandths))
            }
            None => Ok(QValue::MAX),
        }
    }
}

impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1000 {
            return write!(f, "1");
        }
        let digits = format!("{:03}", self.0);
        write!(f, "0.{}", digits.trim_end_matches('0'))
    }
}

/// A raw header token paired with its quality factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedValue {
    pub value: String,
    pub quality: QValue,
}

impl QualifiedValue {
    pub fn new(value: impl Into<String>, quality: QValue) -> Self {
        Self {
            value: value.into(),
            quality,
        }
    }
}

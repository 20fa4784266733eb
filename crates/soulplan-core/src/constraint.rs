//! Numeric attribute constraints.
//!
//! A constraint restricts a computed attribute of a candidate (speed or crit
//! chance) to an inclusive range. Either bound may be open; a range with
//! both bounds open imposes nothing and is treated as absent.

use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when parsing an attribute name or a range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintParseError {
    #[error("Unsupported attribute constraint {0}")]
    UnknownAttribute(String),

    #[error("Illegal constraint {0}, must be a number N or range of the form M-N")]
    Malformed(String),

    #[error("{input} could not be parsed as a number: {source}")]
    NotANumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Illegal constraint {min}-{max}, lower bound exceeds upper bound")]
    Inverted { min: i32, max: i32 },
}

/// Constrainable candidate attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Attribute {
    /// Shikigami speed plus soul speed.
    #[cfg_attr(feature = "serde", serde(alias = "spd"))]
    Speed,
    /// Effective crit chance in percentage points.
    Crit,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Speed => write!(f, "speed"),
            Attribute::Crit => write!(f, "crit"),
        }
    }
}

impl FromStr for Attribute {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spd" | "speed" => Ok(Attribute::Speed),
            "crit" => Ok(Attribute::Crit),
            _ => Err(ConstraintParseError::UnknownAttribute(s.to_string())),
        }
    }
}

/// An inclusive range with optional bounds.
///
/// # Examples
///
/// ```
/// use soulplan_core::RangeConstraint;
///
/// let spd: RangeConstraint = "117-127".parse().unwrap();
/// assert!(spd.contains(117) && spd.contains(127));
/// assert!(!spd.contains(128));
///
/// let crit: RangeConstraint = "90-".parse().unwrap();
/// assert!(crit.contains(100));
/// assert_eq!(crit.max, None);
///
/// assert!("-".parse::<RangeConstraint>().unwrap().is_unbounded());
/// assert!("1-2-3".parse::<RangeConstraint>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RangeRepr", into = "String")
)]
pub struct RangeConstraint {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl RangeConstraint {
    /// Both bounds set.
    ///
    /// # Errors
    /// Returns [`ConstraintParseError::Inverted`] if `min > max`.
    pub fn between(min: i32, max: i32) -> Result<Self, ConstraintParseError> {
        Self::new(Some(min), Some(max))
    }

    /// Either bound may be open.
    pub fn new(min: Option<i32>, max: Option<i32>) -> Result<Self, ConstraintParseError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConstraintParseError::Inverted { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub fn exactly(value: i32) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: i32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl fmt::Display for RangeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "{}", min),
            (Some(min), Some(max)) => write!(f, "{}-{}", min, max),
            (Some(min), None) => write!(f, "{}-", min),
            (None, Some(max)) => write!(f, "-{}", max),
            (None, None) => write!(f, "-"),
        }
    }
}

impl FromStr for RangeConstraint {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').map(str::trim).collect();
        let bound = |part: &str| -> Result<Option<i32>, ConstraintParseError> {
            if part.is_empty() {
                return Ok(None);
            }
            part.parse()
                .map(Some)
                .map_err(|source| ConstraintParseError::NotANumber {
                    input: part.to_string(),
                    source,
                })
        };

        match parts.as_slice() {
            &[single] if !single.is_empty() => {
                let value = bound(single)?.unwrap_or_default();
                Ok(Self::exactly(value))
            }
            &[low, high] => Self::new(bound(low)?, bound(high)?),
            _ => Err(ConstraintParseError::Malformed(s.to_string())),
        }
    }
}

impl From<RangeConstraint> for String {
    fn from(range: RangeConstraint) -> Self {
        range.to_string()
    }
}

/// Accepted serialized forms of a range: `"M-N"`, a bare integer, or a table.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Exact(i32),
    Text(String),
    Bounds {
        #[serde(default)]
        min: Option<i32>,
        #[serde(default)]
        max: Option<i32>,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<RangeRepr> for RangeConstraint {
    type Error = ConstraintParseError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        match repr {
            RangeRepr::Exact(value) => Ok(Self::exactly(value)),
            RangeRepr::Text(text) => text.parse(),
            RangeRepr::Bounds { min, max } => Self::new(min, max),
        }
    }
}

/// Per-attribute constraints of one team member.
///
/// Unbounded ranges are never stored, so an empty set filters nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Constraints {
    ranges: BTreeMap<Attribute, RangeConstraint>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range for `attribute`; an unbounded range clears it.
    pub fn insert(&mut self, attribute: Attribute, range: RangeConstraint) {
        if range.is_unbounded() {
            self.ranges.remove(&attribute);
        } else {
            self.ranges.insert(attribute, range);
        }
    }

    pub fn with(mut self, attribute: Attribute, range: RangeConstraint) -> Self {
        self.insert(attribute, range);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<RangeConstraint> {
        self.ranges
            .get(&attribute)
            .copied()
            .filter(|r| !r.is_unbounded())
    }

    /// Returns true if `value` satisfies the range for `attribute`, or no range is set.
    #[inline]
    pub fn allows(&self, attribute: Attribute, value: i32) -> bool {
        self.ranges
            .get(&attribute)
            .map_or(true, |range| range.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.values().all(RangeConstraint::is_unbounded)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, RangeConstraint)> + '_ {
        self.ranges
            .iter()
            .filter(|(_, r)| !r.is_unbounded())
            .map(|(a, r)| (*a, *r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("100".parse(), Ok(RangeConstraint::exactly(100)));
        assert_eq!("117-127".parse(), RangeConstraint::between(117, 127));
        assert_eq!("90-".parse(), Ok(RangeConstraint::at_least(90)));
        assert_eq!("-128".parse(), Ok(RangeConstraint::at_most(128)));
        assert_eq!(" 10 - 20 ".parse(), RangeConstraint::between(10, 20));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1-2-3".parse::<RangeConstraint>(),
            Err(ConstraintParseError::Malformed(_))
        ));
        assert!(matches!(
            "fast".parse::<RangeConstraint>(),
            Err(ConstraintParseError::NotANumber { .. })
        ));
        assert!(matches!(
            "20-10".parse::<RangeConstraint>(),
            Err(ConstraintParseError::Inverted { min: 20, max: 10 })
        ));
        assert!("".parse::<RangeConstraint>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["100", "117-127", "90-", "-128", "-"] {
            let range: RangeConstraint = text.parse().unwrap();
            assert_eq!(range.to_string(), text);
        }
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!("SPD".parse(), Ok(Attribute::Speed));
        assert_eq!("speed".parse(), Ok(Attribute::Speed));
        assert_eq!("crit".parse(), Ok(Attribute::Crit));
        assert_eq!(
            "atk".parse::<Attribute>(),
            Err(ConstraintParseError::UnknownAttribute("atk".to_string()))
        );
    }

    #[test]
    fn test_unbounded_constraint_is_absent() {
        let constraints = Constraints::new()
            .with(Attribute::Speed, RangeConstraint::default())
            .with(Attribute::Crit, RangeConstraint::at_least(90));

        assert_eq!(constraints.get(Attribute::Speed), None);
        assert!(constraints.allows(Attribute::Speed, -5));
        assert!(!constraints.allows(Attribute::Crit, 89));
        assert!(constraints.allows(Attribute::Crit, 90));
        assert_eq!(constraints.iter().count(), 1);
        assert!(Constraints::new().is_empty());
    }
}

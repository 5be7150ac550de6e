//! Compounding rules and compounding frequencies.
//!
//! Both enums carry stable integer tags so that a binding layer can pass
//! them across a language boundary as plain integers.

use std::fmt;
use std::str::FromStr;

use crate::types::RateError;

/// How interest accrues over a period.
///
/// # Integer tags
///
/// | variant | tag |
/// |---|---|
/// | `Simple` | 0 |
/// | `Compounded` | 1 |
/// | `Continuous` | 2 |
/// | `SimpleThenCompounded` | 3 |
///
/// # Examples
///
/// ```
/// use curve_core::rates::Compounding;
///
/// assert_eq!(Compounding::try_from(2).unwrap(), Compounding::Continuous);
/// assert_eq!(Compounding::Continuous.tag(), 2);
/// assert_eq!("compounded".parse::<Compounding>().unwrap(), Compounding::Compounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compounding {
    /// `1 + r·τ`
    Simple,
    /// `(1 + r/f)^(f·τ)`
    Compounded,
    /// `exp(r·τ)`
    #[default]
    Continuous,
    /// Simple up to one compounding period (`τ ≤ 1/f`), compounded beyond.
    SimpleThenCompounded,
}

impl Compounding {
    /// Returns the integer tag of this compounding rule.
    pub fn tag(&self) -> i32 {
        match self {
            Compounding::Simple => 0,
            Compounding::Compounded => 1,
            Compounding::Continuous => 2,
            Compounding::SimpleThenCompounded => 3,
        }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Compounding::Simple => "Simple",
            Compounding::Compounded => "Compounded",
            Compounding::Continuous => "Continuous",
            Compounding::SimpleThenCompounded => "SimpleThenCompounded",
        }
    }

    /// Returns true when this rule reads the compounding frequency.
    pub fn uses_frequency(&self) -> bool {
        matches!(
            self,
            Compounding::Compounded | Compounding::SimpleThenCompounded
        )
    }

    /// Checks that `frequency` can be combined with this rule.
    ///
    /// `Compounded` and `SimpleThenCompounded` need a periodic frequency, so
    /// `NoFrequency` and `Once` are rejected. The other rules ignore the
    /// frequency entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::rates::{Compounding, Frequency};
    ///
    /// assert!(Compounding::Compounded.check_frequency(Frequency::Annual).is_ok());
    /// assert!(Compounding::Compounded.check_frequency(Frequency::NoFrequency).is_err());
    /// assert!(Compounding::Continuous.check_frequency(Frequency::NoFrequency).is_ok());
    /// ```
    pub fn check_frequency(&self, frequency: Frequency) -> Result<(), RateError> {
        if self.uses_frequency() && frequency.periods_per_year().is_none() {
            return Err(RateError::InvalidFrequency {
                compounding: *self,
                frequency,
            });
        }
        Ok(())
    }
}

impl TryFrom<i32> for Compounding {
    type Error = String;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Compounding::Simple),
            1 => Ok(Compounding::Compounded),
            2 => Ok(Compounding::Continuous),
            3 => Ok(Compounding::SimpleThenCompounded),
            _ => Err(format!("Unknown compounding tag: {}", tag)),
        }
    }
}

impl FromStr for Compounding {
    type Err = String;

    /// Parses a compounding rule from its name (case-insensitive, `_` and
    /// `-` ignored) or its integer tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tag) = trimmed.parse::<i32>() {
            return Compounding::try_from(tag);
        }
        match trimmed.to_uppercase().replace(['_', '-', ' '], "").as_str() {
            "SIMPLE" => Ok(Compounding::Simple),
            "COMPOUNDED" => Ok(Compounding::Compounded),
            "CONTINUOUS" => Ok(Compounding::Continuous),
            "SIMPLETHENCOMPOUNDED" => Ok(Compounding::SimpleThenCompounded),
            _ => Err(format!("Unknown compounding: {}", s)),
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of compounding periods per year.
///
/// Tags follow the usual market-library numbering, where the tag of a
/// periodic frequency is its number of periods per year.
///
/// # Examples
///
/// ```
/// use curve_core::rates::Frequency;
///
/// assert_eq!(Frequency::Semiannual.tag(), 2);
/// assert_eq!(Frequency::Semiannual.periods_per_year(), Some(2.0));
/// assert_eq!(Frequency::Once.periods_per_year(), None);
/// assert_eq!(Frequency::try_from(-1).unwrap(), Frequency::NoFrequency);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    /// No compounding frequency (tag -1).
    NoFrequency,
    /// Single payment at maturity (tag 0).
    Once,
    /// Once a year (tag 1).
    #[default]
    Annual,
    /// Twice a year (tag 2).
    Semiannual,
    /// Every fourth month (tag 3).
    EveryFourthMonth,
    /// Every third month (tag 4).
    Quarterly,
    /// Every second month (tag 6).
    Bimonthly,
    /// Once a month (tag 12).
    Monthly,
    /// Every fourth week (tag 13).
    EveryFourthWeek,
    /// Every second week (tag 26).
    Biweekly,
    /// Once a week (tag 52).
    Weekly,
    /// Once a day (tag 365).
    Daily,
}

impl Frequency {
    /// All frequencies in tag order.
    pub const ALL: [Frequency; 12] = [
        Frequency::NoFrequency,
        Frequency::Once,
        Frequency::Annual,
        Frequency::Semiannual,
        Frequency::EveryFourthMonth,
        Frequency::Quarterly,
        Frequency::Bimonthly,
        Frequency::Monthly,
        Frequency::EveryFourthWeek,
        Frequency::Biweekly,
        Frequency::Weekly,
        Frequency::Daily,
    ];

    /// Returns the integer tag of this frequency.
    pub fn tag(&self) -> i32 {
        match self {
            Frequency::NoFrequency => -1,
            Frequency::Once => 0,
            Frequency::Annual => 1,
            Frequency::Semiannual => 2,
            Frequency::EveryFourthMonth => 3,
            Frequency::Quarterly => 4,
            Frequency::Bimonthly => 6,
            Frequency::Monthly => 12,
            Frequency::EveryFourthWeek => 13,
            Frequency::Biweekly => 26,
            Frequency::Weekly => 52,
            Frequency::Daily => 365,
        }
    }

    /// Returns the number of compounding periods per year, or `None` for the
    /// non-periodic frequencies (`NoFrequency`, `Once`).
    pub fn periods_per_year(&self) -> Option<f64> {
        match self {
            Frequency::NoFrequency | Frequency::Once => None,
            periodic => Some(f64::from(periodic.tag())),
        }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::NoFrequency => "NoFrequency",
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::EveryFourthMonth => "EveryFourthMonth",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::EveryFourthWeek => "EveryFourthWeek",
            Frequency::Biweekly => "Biweekly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        }
    }
}

impl TryFrom<i32> for Frequency {
    type Error = String;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        Frequency::ALL
            .iter()
            .copied()
            .find(|f| f.tag() == tag)
            .ok_or_else(|| format!("Unknown frequency tag: {}", tag))
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses a frequency from its name (case-insensitive, `_` and `-`
    /// ignored) or its integer tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tag) = trimmed.parse::<i32>() {
            return Frequency::try_from(tag);
        }
        let key = trimmed.to_uppercase().replace(['_', '-', ' '], "");
        Frequency::ALL
            .iter()
            .copied()
            .find(|f| f.name().to_uppercase() == key)
            .ok_or_else(|| format!("Unknown frequency: {}", s))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Compounding, Frequency};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Compounding {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Compounding {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Compounding::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}

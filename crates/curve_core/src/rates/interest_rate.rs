//! Interest rate value type and compound-factor inversion.

use super::{Compounding, Frequency};
use crate::types::RateError;

/// Discount factor of a continuously compounded rate: `exp(-rate * time)`.
///
/// # Examples
///
/// ```
/// use curve_core::rates::continuous_discount;
///
/// let df = continuous_discount(0.05, 1.0);
/// assert!((df - (-0.05_f64).exp()).abs() < 1e-15);
/// assert_eq!(continuous_discount(0.05, 0.0), 1.0);
/// ```
#[inline]
pub fn continuous_discount(rate: f64, time: f64) -> f64 {
    (-rate * time).exp()
}

/// An interest rate quoted under a compounding rule and frequency.
///
/// The frequency is only read by `Compounded` and `SimpleThenCompounded`.
///
/// # Examples
///
/// ```
/// use curve_core::rates::{Compounding, Frequency, InterestRate};
///
/// let rate = InterestRate::new(0.04, Compounding::Compounded, Frequency::Semiannual).unwrap();
/// let compound = rate.compound_factor(2.0);
/// assert!((compound - 1.02_f64.powi(4)).abs() < 1e-12);
///
/// // Going back from the compound factor recovers the rate
/// let implied = InterestRate::implied(
///     compound,
///     2.0,
///     Compounding::Compounded,
///     Frequency::Semiannual,
/// )
/// .unwrap();
/// assert!((implied.rate() - 0.04).abs() < 1e-12);
/// ```
///
/// Deserialization goes through [`InterestRate::new`], so a serialized rate
/// with an unusable frequency is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InterestRate {
    rate: f64,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Creates a rate, checking that the frequency suits the compounding rule.
    ///
    /// # Returns
    ///
    /// * `Ok(InterestRate)` - valid combination
    /// * `Err(RateError::InvalidFrequency)` - `Compounded` or
    ///   `SimpleThenCompounded` with `NoFrequency` or `Once`
    pub fn new(
        rate: f64,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self, RateError> {
        compounding.check_frequency(frequency)?;
        Ok(Self {
            rate,
            compounding,
            frequency,
        })
    }

    /// Creates a continuously compounded rate.
    pub fn continuous(rate: f64) -> Self {
        Self {
            rate,
            compounding: Compounding::Continuous,
            frequency: Frequency::NoFrequency,
        }
    }

    /// Returns the rate value.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the compounding rule.
    #[inline]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the compounding frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Growth of one unit over a year fraction `tau`.
    ///
    /// | compounding | factor |
    /// |---|---|
    /// | Simple | `1 + r·τ` |
    /// | Compounded | `(1 + r/f)^(f·τ)` |
    /// | Continuous | `exp(r·τ)` |
    /// | SimpleThenCompounded | Simple if `τ ≤ 1/f`, else Compounded |
    pub fn compound_factor(&self, tau: f64) -> f64 {
        let r = self.rate;
        // Construction guarantees a periodic frequency wherever it is read.
        let f = self.frequency.periods_per_year().unwrap_or(1.0);
        match self.compounding {
            Compounding::Simple => 1.0 + r * tau,
            Compounding::Compounded => (1.0 + r / f).powf(f * tau),
            Compounding::Continuous => (r * tau).exp(),
            Compounding::SimpleThenCompounded => {
                if tau <= 1.0 / f {
                    1.0 + r * tau
                } else {
                    (1.0 + r / f).powf(f * tau)
                }
            }
        }
    }

    /// Discount factor over a year fraction `tau`: `1 / compound_factor(tau)`.
    pub fn discount_factor(&self, tau: f64) -> f64 {
        1.0 / self.compound_factor(tau)
    }

    /// Rate that grows one unit into `compound` over `tau` years.
    ///
    /// Checks run in this order: frequency, time span, compound factor.
    ///
    /// # Arguments
    ///
    /// * `compound` - compound factor (the reciprocal of a discount factor)
    /// * `tau` - year fraction, must be strictly positive
    /// * `compounding` - rule to quote the rate under
    /// * `frequency` - compounding frequency (read by periodic rules only)
    ///
    /// # Returns
    ///
    /// * `Err(RateError::InvalidFrequency)` - periodic rule without a periodic frequency
    /// * `Err(RateError::InvalidTimeSpan)` - `tau <= 0` or NaN
    /// * `Err(RateError::NonPositiveCompoundFactor)` - `compound <= 0` or non-finite
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::rates::{Compounding, Frequency, InterestRate};
    ///
    /// let df: f64 = 0.95;
    /// let r = InterestRate::implied(1.0 / df, 1.0, Compounding::Continuous, Frequency::NoFrequency)
    ///     .unwrap();
    /// assert!((r.rate() + df.ln()).abs() < 1e-15);
    /// ```
    pub fn implied(
        compound: f64,
        tau: f64,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self, RateError> {
        compounding.check_frequency(frequency)?;

        if tau.is_nan() || tau <= 0.0 {
            return Err(RateError::InvalidTimeSpan { tau });
        }
        if !compound.is_finite() || compound <= 0.0 {
            return Err(RateError::NonPositiveCompoundFactor { compound });
        }

        let f = frequency.periods_per_year().unwrap_or(1.0);
        let simple = || (compound - 1.0) / tau;
        let periodic = || f * (compound.powf(1.0 / (f * tau)) - 1.0);

        let rate = match compounding {
            Compounding::Simple => simple(),
            Compounding::Compounded => periodic(),
            Compounding::Continuous => compound.ln() / tau,
            Compounding::SimpleThenCompounded => {
                if tau <= 1.0 / f {
                    simple()
                } else {
                    periodic()
                }
            }
        };

        Ok(Self {
            rate,
            compounding,
            frequency,
        })
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::InterestRate;
    use crate::rates::{Compounding, Frequency};
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct RawInterestRate {
        rate: f64,
        compounding: Compounding,
        frequency: Frequency,
    }

    impl<'de> Deserialize<'de> for InterestRate {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawInterestRate::deserialize(deserializer)?;
            InterestRate::new(raw.rate, raw.compounding, raw.frequency).map_err(de::Error::custom)
        }
    }
}

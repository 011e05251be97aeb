//! Positional big-integer encoding of polynomial coefficients.
//!
//! A product of generating functions can have exponentially many monomials, so instead of
//! expanding it, the product is evaluated once at integer points chosen so that every
//! monomial lands in its own *digit band* of a large base:
//!
//! - `base = 10^d` is the smallest power of ten greater than an upper bound `M` on every
//!   coefficient, so a single coefficient always fits into one band without carrying over.
//! - A tracked variable `i` is evaluated at `base^(c + 1)`, where `c` is the *consumed
//!   capacity*: the highest band index any combination of exponents of the previously
//!   tracked variables can reach. The capacity then grows to `c + deg_i * (c + 1)`.
//! - A variable that never appears (degree 0) is evaluated at 0, and a variable that is
//!   summed over (marginalized) is evaluated at 1, which folds all its exponents into the
//!   same band.
//!
//! This is mixed-radix positional notation over the exponent vectors: the monomial with
//! exponents `e` lands in band `Σ e_i * (c_i + 1)`, and distinct `e` within the degree
//! bounds get distinct bands. The value of the whole product is then the superposition of
//! all coefficients, and [`CoefficientString::query`] extracts one of them with a division
//! and a remainder.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use pgf_rs::coeff::CoefficientString;
//!
//! // 18 + 13x + 12x^2 + 7xy + 9xy^2 evaluated at x = 100, y = 10^7, in base 100
//! let x = BigUint::from(100u32);
//! let y = BigUint::from(10_000_000u32);
//! let value = BigUint::from(18u32)
//!     + BigUint::from(13u32) * &x
//!     + BigUint::from(12u32) * x.pow(2)
//!     + BigUint::from(7u32) * &x * &y
//!     + BigUint::from(9u32) * &x * y.pow(2);
//! let string = CoefficientString::new(BigUint::from(100u32), vec![x, y], value);
//!
//! assert_eq!(string.query(&[1, 0]).unwrap(), BigUint::from(13u32));
//! assert_eq!(string.query(&[1, 2]).unwrap(), BigUint::from(9u32));
//! assert_eq!(string.query(&[0, 1]).unwrap(), BigUint::ZERO);
//! ```

use log::{debug, trace};
use num_bigint::BigUint;

use crate::error::{Error, Result};

/// How one variable is placed into the encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Band {
    /// The variable never appears with a positive exponent; evaluated at 0.
    Absent,
    /// The variable is summed over; evaluated at 1.
    Marginalized,
    /// The variable is evaluated at `base^exponent`.
    Tracked { exponent: u32 },
}

/// The evaluation plan for a coefficient encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLayout {
    /// Power of ten strictly greater than every coefficient.
    pub base: BigUint,
    /// Number of decimal digits per band, i.e. `base = 10^base_digits`.
    pub base_digits: u32,
    /// Placement of each variable.
    pub bands: Vec<Band>,
    /// Evaluation point of each variable.
    pub points: Vec<BigUint>,
    /// Highest band index reachable by any exponent combination within the degree bounds.
    pub consumed_capacity: u32,
}

impl BandLayout {
    /// Plans the encoding of a polynomial with the given per-variable `degrees`, whose
    /// coefficients are all at most `max_coefficient`.
    ///
    /// With `isolate = Some(mask)`, only the variables with `mask[i] == true` are tracked and
    /// all others are marginalized. The mask must have one entry per variable.
    pub fn new(degrees: &[u32], max_coefficient: &BigUint, isolate: Option<&[bool]>) -> Result<Self> {
        if let Some(mask) = isolate {
            Error::check_dims(degrees.len(), mask.len())?;
        }

        let base_digits = max_coefficient.to_str_radix(10).len() as u32;
        let base = BigUint::from(10u32).pow(base_digits);
        debug!("band layout: max coefficient = {}, base = 10^{}", max_coefficient, base_digits);

        let mut consumed_capacity = 0;
        let mut bands = Vec::with_capacity(degrees.len());
        let mut points = Vec::with_capacity(degrees.len());
        for (i, &degree) in degrees.iter().enumerate() {
            let band = if degree == 0 {
                Band::Absent
            } else if isolate.is_some_and(|mask| !mask[i]) {
                Band::Marginalized
            } else {
                let exponent = consumed_capacity + 1;
                consumed_capacity += degree * exponent;
                Band::Tracked { exponent }
            };
            debug!("band layout: variable {} (degree {}) -> {:?}", i, degree, band);
            points.push(match band {
                Band::Absent => BigUint::ZERO,
                Band::Marginalized => BigUint::from(1u32),
                Band::Tracked { exponent } => base.pow(exponent),
            });
            bands.push(band);
        }
        debug!("band layout: consumed capacity = {}", consumed_capacity);

        Ok(Self {
            base,
            base_digits,
            bands,
            points,
            consumed_capacity,
        })
    }

    pub fn num_vars(&self) -> usize {
        self.bands.len()
    }

    /// Index of the digit band the monomial with the given exponents lands in.
    ///
    /// Returns `None` if the monomial vanishes at the evaluation points, i.e. it has a
    /// positive exponent on an absent variable.
    pub fn band_index(&self, exponents: &[u32]) -> Result<Option<u32>> {
        Error::check_dims(self.num_vars(), exponents.len())?;
        let mut index = 0;
        for (band, &e) in self.bands.iter().zip(exponents) {
            match band {
                Band::Absent if e > 0 => return Ok(None),
                Band::Absent | Band::Marginalized => {}
                Band::Tracked { exponent } => index += e * exponent,
            }
        }
        Ok(Some(index))
    }

    /// Packages the value of the polynomial at [`points`][Self::points].
    pub fn into_coefficient_string(self, value: BigUint) -> CoefficientString {
        CoefficientString::new(self.base, self.points, value)
    }
}

/// A polynomial evaluated at a point whose coefficients occupy disjoint digit bands of `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientString {
    base: BigUint,
    basis: Vec<BigUint>,
    value: BigUint,
}

impl CoefficientString {
    pub fn new(base: BigUint, basis: Vec<BigUint>, value: BigUint) -> Self {
        Self { base, basis, value }
    }

    pub fn base(&self) -> &BigUint {
        &self.base
    }

    pub fn basis(&self) -> &[BigUint] {
        &self.basis
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn num_vars(&self) -> usize {
        self.basis.len()
    }

    /// Coefficient of the monomial with the given exponents.
    ///
    /// Computes `(value / Π basis[i]^exponents[i]) mod base`. A positive exponent on a
    /// variable evaluated at 0 yields 0, since such a monomial cannot occur.
    pub fn query(&self, exponents: &[u32]) -> Result<BigUint> {
        Error::check_dims(self.num_vars(), exponents.len())?;
        let shift = self
            .basis
            .iter()
            .zip(exponents)
            .fold(BigUint::from(1u32), |acc, (b, &e)| acc * b.pow(e));
        if shift == BigUint::ZERO {
            trace!("query({:?}) -> 0 (absent variable)", exponents);
            return Ok(BigUint::ZERO);
        }
        let coefficient = (&self.value / shift) % &self.base;
        trace!("query({:?}) -> {}", exponents, coefficient);
        Ok(coefficient)
    }
}

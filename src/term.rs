//! Single monomials of a multivariate polynomial.

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::latex::variable_name;

/// One monomial: a non-negative integer coefficient and a fixed-length exponent vector.
///
/// The length of the exponent vector is the number of variables the term is defined over.
/// Terms are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    coefficient: BigUint,
    exponents: Vec<u32>,
}

impl Term {
    pub fn new(coefficient: impl Into<BigUint>, exponents: impl Into<Vec<u32>>) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponents: exponents.into(),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    pub fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Evaluates `coefficient * Π values[i]^exponents[i]`.
    ///
    /// A zero exponent contributes a factor of 1, even when the value is 0.
    pub fn evaluate(&self, values: &[BigUint]) -> Result<BigUint> {
        Error::check_dims(self.num_vars(), values.len())?;
        let product = self
            .exponents
            .iter()
            .zip(values)
            .filter(|(&e, _)| e > 0)
            .fold(self.coefficient.clone(), |acc, (&e, v)| acc * v.pow(e));
        Ok(product)
    }

    /// Renders the term as a LaTeX product, e.g. `5x^{2}y`.
    ///
    /// Returns `None` for a zero coefficient; callers are expected to skip those.
    /// Variables without a name in `names` render as `x1`, `x2`, ...
    pub fn format(&self, names: &[&str]) -> Option<String> {
        if self.coefficient == BigUint::ZERO {
            return None;
        }

        let mut factors = String::new();
        for (i, &e) in self.exponents.iter().enumerate() {
            match e {
                0 => {}
                1 => factors.push_str(&variable_name(names, i)),
                _ => factors.push_str(&format!("{}^{{{}}}", variable_name(names, i), e)),
            }
        }

        if factors.is_empty() {
            Some(self.coefficient.to_string())
        } else if self.coefficient == BigUint::from(1u32) {
            Some(factors)
        } else {
            Some(format!("{}{}", self.coefficient, factors))
        }
    }
}

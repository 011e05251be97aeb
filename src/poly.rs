//! Sparse multivariate polynomials with non-negative integer coefficients.
//!
//! A [`Polynomial`] is an ordered list of [`Term`]s over a declared number of variables.
//! Terms are stored literally: two terms with the same exponent vector are kept as separate
//! entries, and zero-coefficient terms are kept as well. Both kinds still take part in
//! [`Polynomial::degrees`], which is what the coefficient encoding sizes its digit bands from.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use pgf_rs::poly::Polynomial;
//!
//! // f(x, y) = 2 + 3x + y + 5x^2y
//! let mut f = Polynomial::new(2);
//! f.add_term(2, &[0, 0]).unwrap();
//! f.add_term(3, &[1, 0]).unwrap();
//! f.add_term(1, &[0, 1]).unwrap();
//! f.add_term(5, &[2, 1]).unwrap();
//!
//! assert_eq!(f.format(&["x", "y"]), "2 + 3x + y + 5x^{2}y");
//! assert_eq!(f.degrees(), vec![2, 1]);
//!
//! let values = [BigUint::from(2u32), BigUint::from(2u32)];
//! assert_eq!(f.evaluate(&values).unwrap(), BigUint::from(50u32));
//! ```

use std::fmt::{Display, Formatter};

use log::debug;
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::latex::{default_names, LatexConfig};
use crate::term::Term;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    num_vars: usize,
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates the empty (zero) polynomial over `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            terms: Vec::new(),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Appends the term `coefficient * Π x_i^exponents[i]`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `exponents` does not have exactly
    /// [`num_vars`][Self::num_vars] entries; the polynomial is left untouched in that case.
    pub fn add_term(&mut self, coefficient: u64, exponents: &[u32]) -> Result<()> {
        self.push(Term::new(coefficient, exponents))
    }

    /// Builder form of [`add_term`][Self::add_term].
    pub fn with_term(mut self, coefficient: u64, exponents: &[u32]) -> Result<Self> {
        self.add_term(coefficient, exponents)?;
        Ok(self)
    }

    /// Appends an already constructed term.
    pub fn push(&mut self, term: Term) -> Result<()> {
        Error::check_dims(self.num_vars, term.num_vars())?;
        debug!("push(term = {:?})", term);
        self.terms.push(term);
        Ok(())
    }

    /// Appends a term whose length is known to be right, e.g. from a fixture table.
    pub(crate) fn push_unchecked(&mut self, coefficient: u64, exponents: &[u32]) {
        debug_assert_eq!(exponents.len(), self.num_vars, "fixture term has wrong length");
        self.terms.push(Term::new(coefficient, exponents));
    }

    /// Sum of the evaluations of every term; the empty polynomial evaluates to 0.
    pub fn evaluate(&self, values: &[BigUint]) -> Result<BigUint> {
        Error::check_dims(self.num_vars, values.len())?;
        let mut total = BigUint::ZERO;
        for term in &self.terms {
            total += term.evaluate(values)?;
        }
        Ok(total)
    }

    /// Per-variable maximum exponent over all terms, zero-coefficient terms included.
    pub fn degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0; self.num_vars];
        for term in &self.terms {
            for (d, &e) in degrees.iter_mut().zip(term.exponents()) {
                *d = (*d).max(e);
            }
        }
        degrees
    }

    /// Largest coefficient, or 0 for the empty polynomial.
    pub fn max_coefficient(&self) -> BigUint {
        self.terms
            .iter()
            .map(|t| t.coefficient())
            .max()
            .cloned()
            .unwrap_or(BigUint::ZERO)
    }

    /// Renders the polynomial as a LaTeX sum, e.g. `1 + h^{2} + 2hs`.
    ///
    /// Zero-coefficient terms are skipped. Returns `"0"` if nothing is left.
    pub fn format(&self, names: &[&str]) -> String {
        self.format_with_config(names, &LatexConfig::default())
    }

    pub fn format_with_config(&self, names: &[&str], config: &LatexConfig) -> String {
        let terms: Vec<String> = self.terms.iter().filter_map(|t| t.format(names)).collect();
        if terms.is_empty() {
            return "0".to_string();
        }
        terms.join(config.term_separator)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = default_names(self.num_vars);
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        write!(f, "{}", self.format(&names))
    }
}

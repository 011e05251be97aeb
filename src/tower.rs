//! Dice towers: many independent dice rolled together.
//!
//! A [`Tower`] holds `(die, multiplicity)` pairs over a common variable space. Its joint
//! generating function is the product of each die's polynomial raised to its multiplicity,
//! and is never expanded: [`Tower::calculate_probabilities`] evaluates it once at the points
//! planned by a [`BandLayout`], and the resulting [`CoefficientString`] is queried for the
//! individual joint coefficients.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use pgf_rs::die::Die;
//! use pgf_rs::tower::Tower;
//!
//! let mut tower = Tower::new(1);
//! tower.add_dice(Die::standard(6), 2).unwrap();
//!
//! let string = tower.calculate_probabilities(None).unwrap();
//! assert_eq!(string.query(&[7]).unwrap(), BigUint::from(6u32));
//! assert_eq!(tower.total_outcomes(), BigUint::from(36u32));
//! ```

use log::debug;
use num_bigint::BigUint;

use crate::coeff::{BandLayout, CoefficientString};
use crate::die::Die;
use crate::error::{Error, Result};
use crate::latex::{variable_name, LatexConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    num_vars: usize,
    entries: Vec<(Die, u32)>,
}

impl Tower {
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            entries: Vec::new(),
        }
    }

    /// Five-variable tower of Arcs battle dice.
    pub fn arcs(skirmish: u32, assault: u32, raid: u32) -> Self {
        let mut tower = Self::new(5);
        tower.entries.push((Die::skirmish(), skirmish));
        tower.entries.push((Die::assault(), assault));
        tower.entries.push((Die::raid(), raid));
        tower
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn entries(&self) -> &[(Die, u32)] {
        &self.entries
    }

    /// Adds `multiplicity` copies of `die` to the tower.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the die has a different number of variables;
    /// the tower is left untouched in that case. A multiplicity of 0 is accepted and has no
    /// effect on any aggregate.
    pub fn add_dice(&mut self, die: Die, multiplicity: u32) -> Result<()> {
        Error::check_dims(self.num_vars, die.num_vars())?;
        debug!("add_dice(faces = {}, multiplicity = {})", die.num_faces(), multiplicity);
        self.entries.push((die, multiplicity));
        Ok(())
    }

    /// Maximum possible total of each attribute across all rolls.
    pub fn degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0; self.num_vars];
        for (die, n) in &self.entries {
            for (d, e) in degrees.iter_mut().zip(die.polynomial().degrees()) {
                *d += n * e;
            }
        }
        degrees
    }

    /// Value of the joint generating function, `Π p_i(values)^m_i`.
    pub fn evaluate(&self, values: &[BigUint]) -> Result<BigUint> {
        Error::check_dims(self.num_vars, values.len())?;
        let mut product = BigUint::from(1u32);
        for (die, n) in &self.entries {
            if *n == 0 {
                continue;
            }
            product *= die.polynomial().evaluate(values)?.pow(*n);
        }
        Ok(product)
    }

    /// Number of equally likely outcomes, `Π faces_i^m_i`.
    pub fn total_outcomes(&self) -> BigUint {
        self.entries
            .iter()
            .fold(BigUint::from(1u32), |acc, (die, n)| acc * BigUint::from(die.num_faces()).pow(*n))
    }

    /// Plans the coefficient encoding of the joint generating function.
    ///
    /// See [`BandLayout::new`] for the meaning of `isolate`.
    pub fn band_layout(&self, isolate: Option<&[bool]>) -> Result<BandLayout> {
        // Coefficients of a generating function sum up to the number of outcomes.
        BandLayout::new(&self.degrees(), &self.total_outcomes(), isolate)
    }

    /// Encodes every joint coefficient of the tower's generating function.
    ///
    /// With `isolate = Some(mask)`, variables not selected by the mask are summed over, so the
    /// queried coefficients are counts of the marginal distribution of the selected ones.
    pub fn calculate_probabilities(&self, isolate: Option<&[bool]>) -> Result<CoefficientString> {
        let layout = self.band_layout(isolate)?;
        let value = self.evaluate(&layout.points)?;
        debug!("calculate_probabilities: value has {} bits", value.bits());
        Ok(layout.into_coefficient_string(value))
    }

    /// Renders the generating function, e.g. `D(x) = \dfrac{1}{36}(x + ... + x^{6})^{2}`.
    pub fn format(&self, name: &str, names: &[&str]) -> String {
        self.format_with_config(name, names, &LatexConfig::default())
    }

    pub fn format_with_config(&self, name: &str, names: &[&str], config: &LatexConfig) -> String {
        let vars: Vec<_> = (0..self.num_vars).map(|i| variable_name(names, i)).collect();
        let lhs = format!("{}({})", name, vars.join(", "));

        let outcomes = self.total_outcomes();
        if outcomes == BigUint::from(1u32) {
            return format!("{} = 1", lhs);
        }

        let factors: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(die, n)| {
                let factor = format!("({})", die.polynomial().format_with_config(names, config));
                if *n > 1 {
                    format!("{}^{{{}}}", factor, n)
                } else {
                    factor
                }
            })
            .collect();

        format!(
            "{} = {}{{1}}{{{}}}{}",
            lhs,
            config.fraction,
            outcomes,
            factors.join(config.factor_separator)
        )
    }
}

//! Joint marginal distributions of two attributes.

use log::debug;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::tower::Tower;

/// Dense probability table over two attributes, indexed `[a][b]` for
/// `a in 0..=range_a` and `b in 0..=range_b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    range_a: u32,
    range_b: u32,
    probabilities: Vec<Vec<f64>>,
}

impl Distribution {
    pub fn range_a(&self) -> u32 {
        self.range_a
    }

    pub fn range_b(&self) -> u32 {
        self.range_b
    }

    pub fn probabilities(&self) -> &[Vec<f64>] {
        &self.probabilities
    }

    /// Probability of `a` and `b`, or 0 outside of the ranges.
    pub fn probability(&self, a: u32, b: u32) -> f64 {
        self.probabilities
            .get(a as usize)
            .and_then(|row| row.get(b as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of all entries; 1 up to rounding.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().flatten().sum()
    }

    /// Marginal distribution of the first attribute.
    pub fn marginal_a(&self) -> Vec<f64> {
        self.probabilities.iter().map(|row| row.iter().sum::<f64>()).collect()
    }

    /// Marginal distribution of the second attribute.
    pub fn marginal_b(&self) -> Vec<f64> {
        (0..=self.range_b as usize)
            .map(|b| self.probabilities.iter().map(|row| row[b]).sum::<f64>())
            .collect()
    }
}

/// `numerator / denominator` as `f64`, staying finite for integers beyond the `f64` range.
fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    const MAX_BITS: u64 = 1000;
    let shift = denominator.bits().saturating_sub(MAX_BITS);
    let n = (numerator >> shift).to_f64().unwrap_or(f64::INFINITY);
    let d = (denominator >> shift).to_f64().unwrap_or(f64::INFINITY);
    n / d
}

impl Tower {
    /// Joint distribution of the attributes `idx_a` and `idx_b`, all others summed over.
    ///
    /// Fails with [`Error::DimensionMismatch`] if either index is not a variable of the tower.
    /// When both indices are equal, the table is diagonal.
    pub fn build_comparative_distribution(&self, idx_a: usize, idx_b: usize) -> Result<Distribution> {
        for idx in [idx_a, idx_b] {
            if idx >= self.num_vars() {
                return Err(Error::DimensionMismatch {
                    expected: self.num_vars(),
                    actual: idx + 1,
                });
            }
        }
        debug!("build_comparative_distribution(idx_a = {}, idx_b = {})", idx_a, idx_b);

        let mut isolate = vec![false; self.num_vars()];
        isolate[idx_a] = true;
        isolate[idx_b] = true;
        let coefficients = self.calculate_probabilities(Some(&isolate))?;

        let degrees = self.degrees();
        let range_a = degrees[idx_a];
        let range_b = degrees[idx_b];
        let total = self.total_outcomes();

        let mut probabilities = Vec::with_capacity(range_a as usize + 1);
        for a in 0..=range_a {
            let mut row = Vec::with_capacity(range_b as usize + 1);
            for b in 0..=range_b {
                if idx_a == idx_b && a != b {
                    row.push(0.0);
                    continue;
                }
                let mut exponents = vec![0; self.num_vars()];
                exponents[idx_a] = a;
                exponents[idx_b] = b;
                let count = coefficients.query(&exponents)?;
                row.push(ratio(&count, &total));
            }
            probabilities.push(row);
        }

        Ok(Distribution {
            range_a,
            range_b,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::die::Die;
    use test_log::test;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(&BigUint::from(1u32), &BigUint::from(4u32)), 0.25);
        let huge = BigUint::from(3u32).pow(5000);
        let r = ratio(&huge, &(&huge * BigUint::from(2u32)));
        assert!((r - 0.5).abs() < EPS, "r = {}", r);
    }

    #[test]
    fn test_skirmish_distribution() {
        let tower = Tower::arcs(1, 0, 0);
        let dist = tower.build_comparative_distribution(0, 1).unwrap();
        assert_eq!(dist.range_a(), 1);
        assert_eq!(dist.range_b(), 0);
        assert_eq!(dist.probabilities(), &[vec![0.5], vec![0.5]]);
        assert!((dist.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_arcs_distribution() {
        let tower = Tower::arcs(1, 1, 1);
        let dist = tower.build_comparative_distribution(0, 2).unwrap();
        assert_eq!(dist.range_a(), 4);
        assert_eq!(dist.range_b(), 1);
        assert!((dist.probability(2, 0) - 42.0 / 216.0).abs() < EPS);
        assert!((dist.probability(3, 1) - 36.0 / 216.0).abs() < EPS);
        assert_eq!(dist.probability(5, 0), 0.0);
        assert!((dist.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_marginals() {
        let mut tower = Tower::new(2);
        let mut p = crate::poly::Polynomial::new(2);
        p.add_term(1, &[1, 0]).unwrap();
        p.add_term(1, &[0, 1]).unwrap();
        tower.add_dice(Die::new(p, 2), 2).unwrap();

        let dist = tower.build_comparative_distribution(0, 1).unwrap();
        // (x + y)^2 / 4 = (x^2 + 2xy + y^2) / 4
        assert_eq!(dist.probability(2, 0), 0.25);
        assert_eq!(dist.probability(1, 1), 0.5);
        assert_eq!(dist.probability(0, 2), 0.25);
        assert_eq!(dist.probability(1, 0), 0.0);
        assert_eq!(dist.marginal_a(), vec![0.25, 0.5, 0.25]);
        assert_eq!(dist.marginal_b(), vec![0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_same_variable_is_diagonal() {
        let mut tower = Tower::new(1);
        tower.add_dice(Die::standard(2), 1).unwrap();
        let dist = tower.build_comparative_distribution(0, 0).unwrap();
        assert_eq!(dist.probabilities(), &[vec![0.0, 0.0, 0.0], vec![0.0, 0.5, 0.0], vec![0.0, 0.0, 0.5]]);
    }

    #[test]
    fn test_index_out_of_range() {
        let tower = Tower::arcs(1, 1, 1);
        assert_eq!(
            tower.build_comparative_distribution(0, 5),
            Err(Error::DimensionMismatch { expected: 5, actual: 6 })
        );
    }
}

//! Property tests for the PGF engine.
//!
//! Coefficients recovered from the digit-band encoding are checked against a direct
//! expansion of the product polynomial.

use std::collections::HashMap;

use num_bigint::BigUint;
use pgf_rs::{Die, Error, Polynomial, Tower};

/// Expands `Π p_i^m_i` term by term into a map from exponent vector to coefficient.
fn expand(tower: &Tower) -> HashMap<Vec<u32>, BigUint> {
    let mut result = HashMap::new();
    result.insert(vec![0; tower.num_vars()], BigUint::from(1u32));
    for (die, n) in tower.entries() {
        for _ in 0..*n {
            let mut next: HashMap<Vec<u32>, BigUint> = HashMap::new();
            for (exponents, count) in &result {
                for term in die.polynomial().terms() {
                    let e: Vec<u32> = exponents.iter().zip(term.exponents()).map(|(a, b)| a + b).collect();
                    *next.entry(e).or_default() += count * term.coefficient();
                }
            }
            result = next;
        }
    }
    result
}

/// All exponent vectors within the given bounds.
fn combinations(bounds: &[u32]) -> Vec<Vec<u32>> {
    let mut all = vec![vec![]];
    for &bound in bounds {
        all = all
            .into_iter()
            .flat_map(|prefix| {
                (0..=bound).map(move |e| {
                    let mut v = prefix.clone();
                    v.push(e);
                    v
                })
            })
            .collect();
    }
    all
}

// ─── Coefficient Queries ───────────────────────────────────────────────────────

#[test]
fn queries_sum_to_total_outcomes() {
    let towers = [
        Tower::arcs(1, 4, 0),
        Tower::arcs(2, 1, 2),
        Tower::arcs(0, 0, 3),
        {
            let mut t = Tower::new(1);
            t.add_dice(Die::standard(6), 3).unwrap();
            t.add_dice(Die::standard(4), 1).unwrap();
            t
        },
    ];
    for tower in towers {
        let string = tower.calculate_probabilities(None).unwrap();
        let sum: BigUint = combinations(&tower.degrees())
            .iter()
            .map(|e| string.query(e).unwrap())
            .sum();
        assert_eq!(sum, tower.total_outcomes());
    }
}

#[test]
fn every_variable_tracked_matches_expansion() {
    let tower = Tower::arcs(2, 3, 2);
    assert_eq!(tower.degrees(), vec![10, 3, 2, 5, 4]);

    let expected = expand(&tower);
    let string = tower.calculate_probabilities(None).unwrap();
    for e in combinations(&tower.degrees()) {
        let count = expected.get(&e).cloned().unwrap_or_default();
        assert_eq!(string.query(&e).unwrap(), count, "exponents = {:?}", e);
    }
}

#[test]
fn marginal_matches_expansion() {
    let tower = Tower::arcs(1, 2, 2);
    let mask = [false, true, false, true, true];
    let string = tower.calculate_probabilities(Some(&mask)).unwrap();

    let mut marginal: HashMap<Vec<u32>, BigUint> = HashMap::new();
    for (e, count) in expand(&tower) {
        let key: Vec<u32> = e.iter().zip(mask).map(|(&x, keep)| if keep { x } else { 0 }).collect();
        *marginal.entry(key).or_default() += count;
    }

    let degrees = tower.degrees();
    for s in 0..=degrees[1] {
        for n in 0..=degrees[3] {
            for k in 0..=degrees[4] {
                let e = vec![0, s, 0, n, k];
                let count = marginal.get(&e).cloned().unwrap_or_default();
                assert_eq!(string.query(&e).unwrap(), count, "exponents = {:?}", e);
            }
        }
    }
}

#[test]
fn evaluate_at_zero_is_constant_term() {
    let mut p = Polynomial::new(3);
    p.add_term(4, &[0, 0, 0]).unwrap();
    p.add_term(7, &[1, 0, 2]).unwrap();
    p.add_term(0, &[0, 0, 0]).unwrap();
    p.add_term(2, &[0, 0, 0]).unwrap();
    let zeros = vec![BigUint::ZERO; 3];
    assert_eq!(p.evaluate(&zeros).unwrap(), BigUint::from(6u32));
}

// ─── Distributions ─────────────────────────────────────────────────────────────

#[test]
fn comparative_distributions_are_probability_tables() {
    let tower = Tower::arcs(2, 2, 1);
    for a in 0..5 {
        for b in 0..5 {
            let dist = tower.build_comparative_distribution(a, b).unwrap();
            assert_eq!(dist.probabilities().len(), dist.range_a() as usize + 1);
            for row in dist.probabilities() {
                assert_eq!(row.len(), dist.range_b() as usize + 1);
                assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
            }
            assert!((dist.total() - 1.0).abs() < 1e-9, "a = {}, b = {}, total = {}", a, b, dist.total());
        }
    }
}

#[test]
fn large_tower_distribution_is_normalized() {
    let tower = Tower::arcs(6, 6, 6);
    let dist = tower.build_comparative_distribution(0, 4).unwrap();
    assert_eq!(dist.range_a(), 6 + 12 + 6);
    assert_eq!(dist.range_b(), 12);
    assert!((dist.total() - 1.0).abs() < 1e-9);
    let marginal = dist.marginal_a();
    assert!((marginal.iter().sum::<f64>() - 1.0).abs() < 1e-9);
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn dimension_mismatches() {
    let mut tower = Tower::arcs(1, 1, 1);
    assert!(matches!(
        tower.add_dice(Die::standard(6), 1),
        Err(Error::DimensionMismatch { expected: 5, actual: 1 })
    ));
    assert_eq!(tower.entries().len(), 3);

    let string = tower.calculate_probabilities(None).unwrap();
    assert!(string.query(&[0, 0, 0]).is_err());
    assert!(tower.evaluate(&[BigUint::ZERO]).is_err());
}

// ─── Sharing ───────────────────────────────────────────────────────────────────

#[test]
fn read_only_queries_from_many_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tower>();
    assert_send_sync::<pgf_rs::CoefficientString>();

    let tower = Tower::arcs(1, 4, 1);
    let reference = tower.calculate_probabilities(None).unwrap();
    std::thread::scope(|scope| {
        for h in 0..4 {
            let tower = &tower;
            let reference = &reference;
            scope.spawn(move || {
                let string = tower.calculate_probabilities(None).unwrap();
                let e = [h, 0, 0, 1, 0];
                assert_eq!(string.query(&e).unwrap(), reference.query(&e).unwrap());
            });
        }
    });
}

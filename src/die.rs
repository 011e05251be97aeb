//! Dice as per-roll generating functions.
//!
//! A [`Die`] pairs a [`Polynomial`] with the number of equally likely faces it has. The
//! coefficient of `x^e` in the polynomial counts the faces whose outcome is the attribute
//! vector `e`; the face count is only used to normalize counts into probabilities.
//!
//! Besides the standard `n`-sided die, this module provides the three battle dice of Arcs,
//! which track five attributes per face, in this order:
//!
//! | variable | attribute      |
//! |----------|----------------|
//! | `h`      | hits           |
//! | `s`      | self-hits      |
//! | `b`      | building hits  |
//! | `n`      | intercepts     |
//! | `k`      | keys           |

use crate::poly::Polynomial;

/// Conventional variable names for the Arcs dice.
pub const ARCS_VARIABLES: [&str; 5] = ["h", "s", "b", "n", "k"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    polynomial: Polynomial,
    num_faces: u32,
}

impl Die {
    pub fn new(polynomial: Polynomial, num_faces: u32) -> Self {
        Self { polynomial, num_faces }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn num_faces(&self) -> u32 {
        self.num_faces
    }

    pub fn num_vars(&self) -> usize {
        self.polynomial.num_vars()
    }

    /// Uniform die with faces `1..=n`: `x + x^2 + ... + x^n`.
    pub fn standard(n: u32) -> Self {
        let mut p = Polynomial::new(1);
        for i in 1..=n {
            p.push_unchecked(1, &[i]);
        }
        Self::new(p, n)
    }

    /// Arcs assault die: `1 + h^2 + h^2 s + hn + 2hs`.
    pub fn assault() -> Self {
        let mut p = Polynomial::new(5);
        p.push_unchecked(1, &[0, 0, 0, 0, 0]);
        p.push_unchecked(1, &[2, 0, 0, 0, 0]);
        p.push_unchecked(1, &[2, 1, 0, 0, 0]);
        p.push_unchecked(1, &[1, 0, 0, 1, 0]);
        p.push_unchecked(2, &[1, 1, 0, 0, 0]);
        Self::new(p, 6)
    }

    /// Arcs skirmish die: `3 + 3h`.
    pub fn skirmish() -> Self {
        let mut p = Polynomial::new(5);
        p.push_unchecked(3, &[0, 0, 0, 0, 0]);
        p.push_unchecked(3, &[1, 0, 0, 0, 0]);
        Self::new(p, 6)
    }

    /// Arcs raid die: `nk^2 + hk + bk + 2hb + n`.
    pub fn raid() -> Self {
        let mut p = Polynomial::new(5);
        p.push_unchecked(1, &[0, 0, 0, 1, 2]);
        p.push_unchecked(1, &[1, 0, 0, 0, 1]);
        p.push_unchecked(1, &[0, 0, 1, 0, 1]);
        p.push_unchecked(2, &[1, 0, 1, 0, 0]);
        p.push_unchecked(1, &[0, 0, 0, 1, 0]);
        Self::new(p, 6)
    }
}

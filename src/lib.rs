//! # pgf-rs: Probability generating functions for dice in Rust
//!
//! **`pgf-rs`** computes exact joint distributions of the attributes rolled by a collection
//! of dice, using multivariate **probability generating functions (PGFs)**.
//!
//! ## What is a PGF?
//!
//! A die that produces a vector of attribute counts per roll is described by a polynomial:
//! the coefficient of `x^e` is the number of faces that produce exactly the attribute vector `e`.
//! Rolling dice independently multiplies their polynomials, so the generating function of a
//! whole tower of dice is `Π p_i^m_i`, and its coefficients count outcomes of every joint total.
//!
//! ## Key Features
//!
//! - **No expansion**: The product polynomial can have exponentially many monomials. It is never
//!   expanded. Instead, it is evaluated once at carefully chosen powers of ten, so that every
//!   coefficient lands in its own *digit band* of a single big integer (see [`coeff`]).
//! - **Exact**: All arithmetic is done on [`BigUint`][num_bigint::BigUint]. Floating point is
//!   only used for the final normalization into probabilities.
//! - **Marginalization**: Attributes can be summed over by evaluating them at 1, which gives
//!   two-attribute distribution tables directly (see [`dist`]).
//! - **LaTeX output**: Polynomials and towers render to LaTeX math strings (see [`latex`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use num_bigint::BigUint;
//! use pgf_rs::die::Die;
//! use pgf_rs::tower::Tower;
//!
//! // 1. Assemble a tower: two six-sided dice, one tracked variable (the pip total)
//! let mut tower = Tower::new(1);
//! tower.add_dice(Die::standard(6), 2).unwrap();
//!
//! // 2. Encode all coefficients of (x + x^2 + ... + x^6)^2 into one integer
//! let string = tower.calculate_probabilities(None).unwrap();
//!
//! // 3. Query: 6 of the 36 outcomes sum up to 7
//! assert_eq!(string.query(&[7]).unwrap(), BigUint::from(6u32));
//! assert_eq!(tower.total_outcomes(), BigUint::from(36u32));
//! ```
//!
//! ## Core Components
//!
//! - **[`poly`]**: Sparse multivariate polynomials made of [`term`]s.
//! - **[`die`]**: Dice, including the standard `n`-sided die and the Arcs battle dice.
//! - **[`tower`]**: Collections of dice and their joint generating function.
//! - **[`coeff`]**: The digit-band encoding and coefficient queries.
//! - **[`dist`]**: Two-attribute probability tables.

pub mod coeff;
pub mod die;
pub mod dist;
pub mod error;
pub mod latex;
pub mod poly;
pub mod term;
pub mod tower;

pub use coeff::{BandLayout, CoefficientString};
pub use die::Die;
pub use dist::Distribution;
pub use error::{Error, Result};
pub use poly::Polynomial;
pub use term::Term;
pub use tower::Tower;

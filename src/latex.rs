//! LaTeX rendering of generating functions.
//!
//! Polynomials and towers render to LaTeX-flavored math strings meant to be embedded into
//! documents by a presentation layer:
//! - exponents use caret-brace notation, `x^{2}`;
//! - coefficients are juxtaposed with their variables, `3x`;
//! - the normalizing scalar of a tower is a fraction, `\dfrac{1}{36}`;
//! - tower factors are parenthesized and juxtaposed, `(x + x^{2})^{2}(3 + 3h)`.
//!
//! # Examples
//!
//! ```
//! use pgf_rs::die::Die;
//! use pgf_rs::latex::LatexConfig;
//! use pgf_rs::tower::Tower;
//!
//! let mut tower = Tower::new(1);
//! tower.add_dice(Die::standard(2), 2).unwrap();
//! assert_eq!(tower.format("P", &["x"]), "P(x) = \\dfrac{1}{4}(x + x^{2})^{2}");
//!
//! let config = LatexConfig {
//!     fraction: "\\frac",
//!     ..LatexConfig::default()
//! };
//! assert_eq!(tower.format_with_config("P", &["x"], &config), "P(x) = \\frac{1}{4}(x + x^{2})^{2}");
//! ```

use std::borrow::Cow;

/// Configuration options for LaTeX output.
///
/// `LatexConfig::default()` yields the standard rendering described in the module docs.
#[derive(Debug, Clone)]
pub struct LatexConfig {
    /// Fraction command for the normalizing scalar (default: `\dfrac`)
    pub fraction: &'static str,
    /// Separator between the terms of a polynomial (default: `" + "`)
    pub term_separator: &'static str,
    /// Separator between the parenthesized factors of a tower (default: empty)
    pub factor_separator: &'static str,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            fraction: "\\dfrac",
            term_separator: " + ",
            factor_separator: "",
        }
    }
}

/// Name of the `index`-th variable (0-indexed).
///
/// Falls back to `x1`, `x2`, ... when `names` does not cover the index.
pub(crate) fn variable_name<'a>(names: &[&'a str], index: usize) -> Cow<'a, str> {
    match names.get(index) {
        Some(&name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("x{}", index + 1)),
    }
}

/// Default variable names `x1..=xn`.
pub(crate) fn default_names(num_vars: usize) -> Vec<String> {
    (1..=num_vars).map(|i| format!("x{}", i)).collect()
}

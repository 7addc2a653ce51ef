pub mod circle;
pub mod complex;
pub mod mobius;

pub use self::circle::Circle;
pub use self::complex::{im, re, solve_quadratic, Complex, I, ONE, TWO, TWO_I, ZERO};
pub use self::mobius::{Mobius, IDENTITY};

#[cfg(test)]
mod __test__;

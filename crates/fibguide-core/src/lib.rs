//! # fibguide-core
//!
//! Interchangeable strategies for computing Fibonacci numbers: naive
//! recursion, iteration, memoization and matrix exponentiation, plus a lazy
//! sequence producer and membership / modular helpers.

pub mod calculator;
pub mod constants;
pub mod iterative;
pub mod iterator;
pub mod matrix;
pub mod matrix_types;
pub mod membership;
pub mod memo;
pub mod modular;
pub mod recursive;
pub mod registry;

pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use iterator::{sequence_prefix, FibIterator};
pub use membership::is_fibonacci;
pub use memo::{fibonacci_memo, MemoCache, MemoizedFibonacci};
pub use modular::fibonacci_mod;

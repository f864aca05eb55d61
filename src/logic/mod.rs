//! Three-valued logic.
//!
//! Dominance between objects is a partial order, so a comparison may be
//! true, false, or undefined. [`TernaryLogicValue`] keeps the undefined
//! case explicit instead of folding it into `false`.

mod ternary;

pub use ternary::TernaryLogicValue;

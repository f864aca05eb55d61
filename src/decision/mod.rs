//! Decisions and decision distributions.
//!
//! A [`Decision`] summarises one object's evaluations on the active
//! decision attributes. It is either a [`SimpleDecision`] (one attribute)
//! or a [`CompositeDecision`] (two or more attributes compared jointly).
//! Decisions are compared with the dominance relation of
//! [`Dominance`](crate::field::Dominance).
//!
//! [`DecisionDistribution`] counts decisions; it is used both for global
//! class sizes and as the payload of every dominance cone.

mod composite;
mod distribution;
mod simple;
mod types;

pub use composite::CompositeDecision;
pub use distribution::DecisionDistribution;
pub use simple::SimpleDecision;
pub use types::Decision;

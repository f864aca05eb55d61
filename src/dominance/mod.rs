//! Dominance cones and rough-set approximations.
//!
//! Given a [`DecisionTable`], [`DominanceCones`] records for every object
//! the distribution of decisions among the objects that dominate it and
//! the objects it dominates, in both the plain and the inverse reading of
//! the relation. Rough-set approximations of decision-class unions, with an
//! optional ε-consistency threshold (VC-DRSA), are built from those cones.
//!
//! # Key Components
//!
//! - [`DecisionTable`]: condition evaluations and decisions of all objects
//! - [`DominanceCones`]: the four cones of every object
//! - [`Union`] / [`Approximations`]: upward and downward unions of classes
//!   and their lower/upper approximations
//!
//! # References
//!
//! - Greco, Matarazzo & Słowiński (2001), "Rough sets theory for multicriteria
//!   decision analysis"
//! - Błaszczyński, Greco, Słowiński & Szeląg (2009), "Monotonic variable
//!   consistency rough set approaches"

mod approximation;
mod config;
mod cones;
mod table;

pub use approximation::{Approximations, Union, UnionClassification, UnionType};
pub use config::{ApproximationConfig, ConeConfig};
pub use cones::DominanceCones;
pub use table::{ConditionProfile, DecisionTable};

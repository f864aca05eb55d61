//! Rule quality and confirmation measures.
//!
//! A decision rule matched against a learning table yields
//! [`RuleCoverageInformation`]: which objects the rule's condition part
//! covers and which objects are positive or neutral for its decision part.
//! From it follow the four cells of the contingency table
//!
//! ```text
//!                 positive   negative
//!   covered          a          c
//!   not covered      b          d
//! ```
//!
//! and fourteen measures: support, strength, confidence, coverage factor,
//! coverage, negative coverage, the ε and ε′ consistency measures, and the
//! F, A, Z, L, c1 and S confirmation measures.
//!
//! # Key Components
//!
//! - [`RuleCoverageInformation`]: coverage of one rule
//! - [`RuleCharacteristics`]: plain record of measure values, as read from
//!   or written to a rule set file
//! - [`ComputableRuleCharacteristics`]: measures computed on first access
//!   from fixed coverage information and cached
//! - [`confirmation`]: the measure formulas over a [`ContingencyTable`]
//!
//! # References
//!
//! - Greco, Pawlak & Słowiński (2004), "Can Bayesian confirmation measures
//!   be useful for rough set decision rules?"
//! - Crupi, Tentori & Gonzalez (2007), "On Bayesian measures of evidential
//!   support: theoretical and empirical issues" (Z measure)
//! - Greco, Słowiński & Szczęch (2012), "Properties of rule interestingness
//!   measures and alternative approaches to normalization of measures"
//!   (A and c1 measures)

mod characteristics;
mod computable;
mod config;
pub mod confirmation;
mod coverage;
mod measure;

pub use characteristics::{Characteristics, RuleCharacteristics};
pub use computable::ComputableRuleCharacteristics;
pub use config::C1Parameters;
pub use confirmation::ContingencyTable;
pub use coverage::RuleCoverageInformation;
pub use measure::{Measure, MeasureValue};

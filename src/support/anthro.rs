//! Anthropometric measurement toolkit.
//!
//! This module provides general-purpose types for body measurements,
//! validated at construction so downstream screening math never has to
//! re-check them.
//!
//! # Overview
//!
//! Screening models consume a person's height and weight, entered in one
//! of two [unit systems](UnitSystem). This toolkit provides:
//!
//! - **Core types**: [`BodyHeight`], [`BodyWeight`]
//! - **Imperial composites**: [`ImperialHeight`] (feet plus inches)
//! - **System selection**: [`UnitSystem`]
//!
//! # Example
//!
//! ```
//! use bodymetrics::support::anthro::{BodyHeight, BodyWeight, ImperialHeight};
//! use bodymetrics::support::constraint::ConstraintResult;
//! use uom::si::{length::centimeter, mass::kilogram};
//!
//! fn main() -> ConstraintResult<()> {
//!     let height = BodyHeight::new::<centimeter>(175.0)?;
//!     let weight = BodyWeight::new::<kilogram>(70.0)?;
//!     assert!(height.get::<centimeter>() > 0.0);
//!     assert!(weight.get::<kilogram>() > 0.0);
//!
//!     // Imperial heights combine strictly positive feet with
//!     // non-negative inches.
//!     let height = ImperialHeight::new(5.0, 10.0)?;
//!     assert_eq!(height.total_inches(), 70.0);
//!
//!     Ok(())
//! }
//! ```

mod body_height;
mod body_weight;
mod imperial_height;
mod unit_system;

pub use body_height::BodyHeight;
pub use body_weight::BodyWeight;
pub use imperial_height::ImperialHeight;
pub use unit_system::UnitSystem;

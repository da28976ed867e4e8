//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (e.g., height,
//! weight). This module provides extensions that are useful for screening
//! models but aren't included in [`uom`].
//!
//! ## Body mass index
//!
//! [`uom`] has no quantity named for body mass index. BMI is mass divided
//! by the square of a length (kg/m² in SI), so it shares dimensions with
//! areal mass density, and the [`BodyMassIndex`] alias makes the domain
//! meaning explicit:
//!
//! ```
//! use bodymetrics::support::units::BodyMassIndex;
//! use uom::si::areal_mass_density::kilogram_per_square_meter;
//! use uom::si::f64::{Length, Mass};
//! use uom::si::{length::meter, mass::kilogram};
//!
//! let height = Length::new::<meter>(1.75);
//! let weight = Mass::new::<kilogram>(70.0);
//! let bmi: BodyMassIndex = weight / (height * height);
//! assert!(bmi.get::<kilogram_per_square_meter>() > 22.0);
//! ```

mod quantities;

pub use quantities::BodyMassIndex;

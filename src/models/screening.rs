//! Health screening models.
//!
//! Screening models turn a small set of body measurements into a coarse,
//! standardized indicator. They are pure computations; collecting the
//! measurements and presenting the result belong to the caller.

pub mod bmi;

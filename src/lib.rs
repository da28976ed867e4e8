//! # Bodymetrics
//!
//! Anthropometric screening models and the measurement tools that
//! support them.
//!
//! ## Crate layout
//!
//! - [`models`]: Screening model implementations, currently the
//!   [BMI model](models::screening::bmi).
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g.,
//!    `screening`), it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains, it moves to
//!    [`support`]
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the
//! public API. Model-specific and domain-specific utility code remains
//! private.

pub mod models;
pub mod support;

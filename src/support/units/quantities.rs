use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Body mass index, kg/m² in SI.
///
/// Dimensionally identical to areal mass density, so unit functions from
/// [`uom::si::areal_mass_density`] apply.
pub type BodyMassIndex = Quantity<ISQ<N2, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

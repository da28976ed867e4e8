use std::fmt;

/// The two supported measurement systems for height and weight input.
///
/// The system determines which input fields are meaningful (centimeters
/// and kilograms, or feet/inches and pounds) and which screening formula
/// applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitSystem {
    /// Centimeters and kilograms.
    #[default]
    Metric,
    /// Feet, inches, and pounds.
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(UnitSystem::Metric.to_string(), "metric");
        assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
    }

    #[test]
    fn defaults_to_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }
}

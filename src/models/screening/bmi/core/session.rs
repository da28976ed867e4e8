use crate::support::anthro::UnitSystem;

use super::{Assessment, Readings, assess};

/// Where a calculation session stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No calculation has been requested.
    Idle,
    /// A calculation is underway and any prior result is cleared.
    Validating,
    /// The last calculation produced an assessment.
    Computed(Assessment),
    /// The last calculation was rejected for invalid input.
    Rejected,
}

/// One form interaction: pending readings under a single unit system,
/// plus the state of the last calculation.
///
/// The computation itself is instantaneous. Callers that surface a
/// perceived-work delay run a timer between
/// [`start_calculation`](Session::start_calculation) and
/// [`complete_calculation`](Session::complete_calculation); the delay
/// never affects the computed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    readings: Readings,
    state: SessionState,
}

impl Session {
    /// Creates an idle session with blank readings.
    #[must_use]
    pub fn new(system: UnitSystem) -> Self {
        Self {
            readings: Readings::empty(system),
            state: SessionState::Idle,
        }
    }

    /// The session's unit system.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.readings.system()
    }

    /// Switches unit systems.
    ///
    /// Switching to a different system discards all pending readings and
    /// any result. Re-selecting the current system is a no-op.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        if system == self.unit_system() {
            return;
        }
        self.readings = Readings::empty(system);
        self.state = SessionState::Idle;
    }

    /// The pending readings.
    #[must_use]
    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Replaces the pending readings.
    ///
    /// Edits within the current system leave the last result visible
    /// until the next calculation. Readings from a different system reset
    /// the session first, so a result never outlives a system switch.
    pub fn set_readings(&mut self, readings: Readings) {
        if readings.system() != self.unit_system() {
            self.state = SessionState::Idle;
        }
        self.readings = readings;
    }

    /// True when the pending readings would validate.
    ///
    /// Callers typically gate calculation on this.
    #[must_use]
    pub fn is_input_valid(&self) -> bool {
        self.readings.validate().is_ok()
    }

    /// Clears any prior result and marks the session as validating.
    pub fn start_calculation(&mut self) {
        self.state = SessionState::Validating;
    }

    /// Finishes a calculation from the pending readings.
    pub fn complete_calculation(&mut self) -> &SessionState {
        self.state = match assess(&self.readings) {
            Some(assessment) => SessionState::Computed(assessment),
            None => SessionState::Rejected,
        };
        &self.state
    }

    /// Runs a full calculation in one step.
    pub fn calculate(&mut self) -> &SessionState {
        self.start_calculation();
        self.complete_calculation()
    }

    /// The state of the last calculation.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The last computed assessment, if any.
    #[must_use]
    pub fn assessment(&self) -> Option<&Assessment> {
        match &self.state {
            SessionState::Computed(assessment) => Some(assessment),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

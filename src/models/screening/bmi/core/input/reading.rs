/// One raw numeric form field, exactly as entered.
///
/// A reading holds unvalidated text for the duration of a single form
/// interaction. [`value`](Reading::value) parses it strictly: surrounding
/// whitespace is ignored, and anything that is not a finite number
/// (including empty text, `inf`, and `NaN`) yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading(String);

impl Reading {
    /// Creates a reading from entered text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The entered text, untouched.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// True when nothing meaningful has been entered.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The reading as a finite number, if it parses as one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl From<&str> for Reading {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Reading {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

use thiserror::Error;

/// Code used when none is configured.
pub const DEFAULT_ACCESS_CODE: &str = "000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("access code must be exactly 3 digits, got {raw:?}")]
    NotThreeDigits { raw: String },
}

/// Gate in front of the exercise flow: a fixed 3-digit numeric code.
///
/// A wrong guess is a local, recoverable condition with no retry limit and no
/// effect on session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGate {
    code: String,
}

impl EntryGate {
    /// # Errors
    ///
    /// Returns `GateError::NotThreeDigits` unless `code` is exactly 3 ASCII
    /// digits.
    pub fn new(code: impl Into<String>) -> Result<Self, GateError> {
        let code = code.into();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(GateError::NotThreeDigits { raw: code });
        }
        Ok(Self { code })
    }

    #[must_use]
    pub fn verify(&self, input: &str) -> bool {
        input == self.code
    }

    /// Keeps only ASCII digits and caps the length at 3, mirroring what the
    /// code input field accepts.
    #[must_use]
    pub fn sanitize_input(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).take(3).collect()
    }
}

impl Default for EntryGate {
    fn default() -> Self {
        Self {
            code: DEFAULT_ACCESS_CODE.to_string(),
        }
    }
}

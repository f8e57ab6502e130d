/// Convenience result type used across the form renderer.
pub type FormResult<T> = Result<T, FormError>;

/// Top-level error taxonomy used by library APIs.
///
/// Missing facility fields, unknown timings and unknown actions are not errors; they render as
/// blanks or are ignored.
#[derive(thiserror::Error, Debug)]
pub enum FormError {
    /// The input document could not be decoded.
    #[error("input decode error: {0}")]
    InputDecode(String),

    /// Drawing or persisting the output document failed.
    #[error("render error: {0}")]
    Render(String),
}

impl FormError {
    /// Build a [`FormError::InputDecode`] value.
    pub fn input_decode(msg: impl Into<String>) -> Self {
        Self::InputDecode(msg.into())
    }

    /// Build a [`FormError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

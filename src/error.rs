use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

/// Errors raised while updating a picker.
///
/// None of these are fatal: a failed update leaves the picker at its last
/// valid color.
///
/// Out-of-range channel input is not an error. Byte channels
/// are bounded by their type and HSV components are expected to be clamped by
/// the caller before they reach the picker.
#[derive(Debug, Diagnostic)]
pub enum PickerError {
    /// A hex literal could not be read as a color, even after padding.
    #[diagnostic(
        code(chromasync::invalid_color_format),
        help("expected up to 8 hexadecimal digits in AARRGGBB order")
    )]
    InvalidColorFormat {
        /// The literal that was rejected.
        #[source_code]
        src: String,
        /// Where in `src` reading failed.
        #[label("rejected here")]
        err_span: SourceSpan,
        /// What went wrong.
        msg: String,
    },
}

/// Result type used by fallible picker operations.
pub type PickerResult<T> = std::result::Result<T, PickerError>;

impl Display for PickerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PickerError::InvalidColorFormat { msg, .. } => {
                write!(f, "Invalid color format: {}", msg)
            }
        }
    }
}

impl Error for PickerError {}

impl PickerError {
    /// Create an [`PickerError::InvalidColorFormat`] error.
    pub fn invalid_color_format(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidColorFormat {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    /// The span of the offending input.
    pub fn span(&self) -> SourceSpan {
        match self {
            PickerError::InvalidColorFormat { err_span, .. } => *err_span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_creation() {
        let err = PickerError::invalid_color_format("FFGG0000", (2, 1), "bad digit 'G'");

        match &err {
            PickerError::InvalidColorFormat { src, err_span, msg } => {
                assert_eq!(src, "FFGG0000");
                assert_eq!(*err_span, (2, 1).into());
                assert_eq!(msg, "bad digit 'G'");
            }
        }
        assert_eq!(err.span(), SourceSpan::from((2, 1)));
        assert_eq!(err.to_string(), "Invalid color format: bad digit 'G'");
    }

    #[test]
    fn error_reports_its_code() {
        let err = PickerError::invalid_color_format("#", (0, 1), "bad digit '#'");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("chromasync::invalid_color_format"));
    }
}

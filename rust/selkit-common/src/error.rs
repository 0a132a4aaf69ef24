use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(index: usize, count: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, count }.into())
    }

    pub fn consistency(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Consistency {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_consistency(&self) -> bool {
        matches!(self.kind(), ErrorKind::Consistency { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// Positional access (or a byte offset) outside `[0, count)`.
    #[error("index {index} is out of range for count {count}")]
    OutOfRange { index: usize, count: usize },

    #[error("consistency violation: {message}")]
    Consistency { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_arg("row_stride", "row_stride > 0");
        assert!(err.is_invalid_arg());
        assert_eq!(
            err.to_string(),
            "invalid argument row_stride: row_stride > 0"
        );

        let err = Error::out_of_range(7, 3);
        assert!(err.is_out_of_range());
        assert_eq!(err.to_string(), "index 7 is out of range for count 3");

        let err = Error::consistency("duplicate index 4");
        assert!(err.is_consistency());
        assert!(matches!(err.into_kind(), ErrorKind::Consistency { .. }));
    }
}

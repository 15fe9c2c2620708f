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

    pub fn format(clause: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Format {
                clause: clause.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Error {
        Error(
            ErrorKind::TypeMismatch {
                expected: expected.into(),
                found: found.into(),
            }
            .into(),
        )
    }

    pub fn unsortable(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Unsortable {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn empty_range(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyRange {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_bounds(index: u64, len: u64) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }

    pub fn too_large(len: u64, limit: u64) -> Error {
        Error(ErrorKind::TooLarge { len, limit }.into())
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

    /// Returns `true` for errors raised while reading range text.
    pub fn is_format(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid range clause '{clause}': {message}")]
    Format { clause: String, message: String },

    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("range is unsortable: {message}")]
    Unsortable { message: String },

    #[error("{operation} requires a non-empty range")]
    EmptyRange { operation: String },

    #[error("index {index} is out of bounds for a range of {len} elements")]
    IndexOutOfBounds { index: u64, len: u64 },

    #[error("range of {len} elements exceeds the materialization limit of {limit}")]
    TooLarge { len: u64, limit: u64 },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

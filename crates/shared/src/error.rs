use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<time::error::Parse> for Error {
    fn from(value: time::error::Parse) -> Self {
        tracing::debug!(error = %value, "rejected date");

        let mut errors = ValidationErrors::new();
        errors.add(
            "date",
            ValidationError::new("format")
                .with_message("Dates must be formatted as YYYY-MM-DD".into()),
        );
        Self::Validate(errors)
    }
}

fn collect_messages(errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errors) => {
                messages.extend(errors.iter().map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                }));
            }
            ValidationErrorsKind::Struct(errors) => collect_messages(errors, messages),
            ValidationErrorsKind::List(items) => {
                for errors in items.values() {
                    collect_messages(errors, messages);
                }
            }
        }
    }
}

impl Error {
    /// One human readable message per failing field, nested inputs included.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validate(errors) => {
                let mut messages = vec![];
                collect_messages(errors, &mut messages);
                messages.sort();
                messages.dedup();
                messages
            }
            other => vec![other.to_string()],
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($what:expr $(,)?) => {
        return Err($crate::Error::NotFound(format!("{}", $what)))
    };
}

#[macro_export]
macro_rules! forbidden {
    () => {
        return Err($crate::Error::Forbidden)
    };
}

#[macro_export]
macro_rules! conflict {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Conflict(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Conflict(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Line {
        #[validate(range(min = 0.0, message = "Quantity must not be negative"))]
        quantity: f64,
    }

    #[derive(Validate)]
    struct Order {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn test_messages_include_nested_list_errors() {
        let order = Order {
            name: String::new(),
            lines: vec![
                Line { quantity: 1.0 },
                Line { quantity: -5.0 },
                Line { quantity: -2.0 },
            ],
        };

        let err = Error::from(order.validate().unwrap_err());
        assert_eq!(
            err.messages(),
            vec!["Name is required", "Quantity must not be negative"]
        );
    }

    #[test]
    fn test_messages_for_plain_errors() {
        assert_eq!(Error::Forbidden.messages(), vec!["forbidden"]);
    }
}

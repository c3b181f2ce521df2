use api::ApiError;
use thiserror::Error;

/// A failed form submission, phrased for the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Caught before anything was sent.
    #[error("{0}")]
    Invalid(String),
    /// The backend answered and said no.
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached or answered gibberish.
    #[error("{0}")]
    Unreachable(String),
}

impl FormError {
    /// Translate an API failure using the form's own fallback texts.
    pub fn from_api(err: &ApiError, rejected: &str, unreachable: &str) -> Self {
        if err.is_status() {
            Self::Rejected(err.message_or(rejected))
        } else {
            Self::Unreachable(unreachable.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api() {
        let rejected = ApiError::Status {
            status: 400,
            message: Some("El correo ya está registrado".into()),
        };
        assert_eq!(
            FormError::from_api(&rejected, "Error al registrar", "sin conexión"),
            FormError::Rejected("El correo ya está registrado".into())
        );

        let silent = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            FormError::from_api(&silent, "Error al registrar", "sin conexión").to_string(),
            "Error al registrar"
        );

        let offline = ApiError::Transport("refused".into());
        assert_eq!(
            FormError::from_api(&offline, "Error al registrar", "sin conexión"),
            FormError::Unreachable("sin conexión".into())
        );
    }
}

use std::fmt;

/// Fatal errors raised while mounting or starting the eye.
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// No element of the expected kind is registered under this id.
    ElementNotFound(String),
    /// The drawing context could not be created; carries the underlying cause.
    ContextUnavailable(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::ElementNotFound(id) => write!(f, "element with id '{id}' not found"),
            UiError::ContextUnavailable(cause) => write!(f, "context null: {cause}"),
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_the_id() {
        let e = UiError::ElementNotFound("wrapper-id".into());
        assert_eq!(e.to_string(), "element with id 'wrapper-id' not found");
    }

    #[test]
    fn context_unavailable_keeps_cause() {
        let e = UiError::ContextUnavailable("no adapter".into());
        assert_eq!(e.to_string(), "context null: no adapter");
    }
}

/// Rejection of a package declaration by its owning collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNameError {
    #[error("package name must not be empty")]
    Empty,

    #[error("package '{name}' is already declared")]
    Duplicate { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidNameError::Empty.to_string(),
            "package name must not be empty"
        );
        assert_eq!(
            InvalidNameError::Duplicate {
                name: "lodash".into()
            }
            .to_string(),
            "package 'lodash' is already declared"
        );
    }
}

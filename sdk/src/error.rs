use std::fmt;
use thiserror::Error;

/// HTTP-style status classification carried by projection and routing errors.
///
/// The crate never speaks HTTP itself; callers map this onto their transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    BadRequest,
    NotFound,
    InternalServerError,
    NotImplemented,
}

impl StatusCode {
    pub const fn as_u16(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Error type for entity projection and service routing
#[derive(Error, Debug)]
pub enum ODataError {
    /// Type projected without an entity-type or complex-type declaration
    #[error("Type '{type_name}' is declared neither as an entity type nor as a complex type")]
    MissingTypeMarker {
        type_name: String,
    },

    /// Entity type without a usable entity set
    #[error("Entity type '{type_name}' does not declare an entity set")]
    MissingEntitySet {
        type_name: String,
    },

    /// Entity, complex, or entity-set declaration with an empty name
    #[error("Type '{type_name}' declares an empty {role} name")]
    EmptyName {
        type_name: String,
        role: String,
    },

    /// Entity type without key fields
    #[error("Entity type '{type_name}' declares no key fields")]
    MissingKeys {
        type_name: String,
    },

    /// Field whose declared type has no protocol representation
    #[error("Field '{field}' of '{type_name}' has unrecognized declared type '{declared}'")]
    UnrecognizedType {
        type_name: String,
        field: String,
        declared: String,
    },

    /// Runtime value that does not match the declared field shape
    #[error("Field '{field}' of '{type_name}' holds a {actual} value but is declared as {declared}")]
    ValueMismatch {
        type_name: String,
        field: String,
        declared: String,
        actual: String,
    },

    /// No entity operation registered for the requested entity set
    #[error("No entity operation registered for entity set '{entity_set}'")]
    UnknownEntitySet {
        entity_set: String,
    },

    /// No custom operation registered under the requested name
    #[error("No custom operation registered under name '{name}'")]
    UnknownFunction {
        name: String,
    },
}

impl ODataError {
    /// Create a MissingTypeMarker error
    pub fn missing_type_marker<T: AsRef<str>>(type_name: T) -> Self {
        Self::MissingTypeMarker {
            type_name: type_name.as_ref().to_string(),
        }
    }

    /// Create a MissingEntitySet error
    pub fn missing_entity_set<T: AsRef<str>>(type_name: T) -> Self {
        Self::MissingEntitySet {
            type_name: type_name.as_ref().to_string(),
        }
    }

    /// Create an EmptyName error
    pub fn empty_name<T: AsRef<str>, R: AsRef<str>>(type_name: T, role: R) -> Self {
        Self::EmptyName {
            type_name: type_name.as_ref().to_string(),
            role: role.as_ref().to_string(),
        }
    }

    /// Create a MissingKeys error
    pub fn missing_keys<T: AsRef<str>>(type_name: T) -> Self {
        Self::MissingKeys {
            type_name: type_name.as_ref().to_string(),
        }
    }

    /// Create an UnrecognizedType error
    pub fn unrecognized_type<T: AsRef<str>, F: AsRef<str>, D: AsRef<str>>(
        type_name: T,
        field: F,
        declared: D,
    ) -> Self {
        Self::UnrecognizedType {
            type_name: type_name.as_ref().to_string(),
            field: field.as_ref().to_string(),
            declared: declared.as_ref().to_string(),
        }
    }

    /// Create a ValueMismatch error
    pub fn value_mismatch<T: AsRef<str>, F: AsRef<str>, D: AsRef<str>, A: AsRef<str>>(
        type_name: T,
        field: F,
        declared: D,
        actual: A,
    ) -> Self {
        Self::ValueMismatch {
            type_name: type_name.as_ref().to_string(),
            field: field.as_ref().to_string(),
            declared: declared.as_ref().to_string(),
            actual: actual.as_ref().to_string(),
        }
    }

    /// Create an UnknownEntitySet error
    pub fn unknown_entity_set<S: AsRef<str>>(entity_set: S) -> Self {
        Self::UnknownEntitySet {
            entity_set: entity_set.as_ref().to_string(),
        }
    }

    /// Create an UnknownFunction error
    pub fn unknown_function<N: AsRef<str>>(name: N) -> Self {
        Self::UnknownFunction {
            name: name.as_ref().to_string(),
        }
    }

    /// Get the status classification for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingTypeMarker { .. }
            | Self::MissingEntitySet { .. }
            | Self::EmptyName { .. }
            | Self::MissingKeys { .. }
            | Self::UnrecognizedType { .. }
            | Self::ValueMismatch { .. } => StatusCode::InternalServerError,

            Self::UnknownEntitySet { .. } | Self::UnknownFunction { .. } => StatusCode::NotFound,
        }
    }

    /// Check if this error comes from how an application type is declared.
    ///
    /// Configuration errors are fatal to the projection that hit them and are
    /// never retried; fixing them requires changing the application's type
    /// declarations, not the request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingTypeMarker { .. }
                | Self::MissingEntitySet { .. }
                | Self::EmptyName { .. }
                | Self::MissingKeys { .. }
                | Self::UnrecognizedType { .. }
                | Self::ValueMismatch { .. }
        )
    }
}

/// Result type alias for projection and service operations
pub type ODataResult<T> = Result<T, ODataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_server_side() {
        let err = ODataError::missing_type_marker("Order");
        assert!(err.is_configuration());
        assert_eq!(err.status(), StatusCode::InternalServerError);
        assert_eq!(err.status().as_u16(), 500);
    }

    #[test]
    fn routing_errors_are_not_found() {
        let err = ODataError::unknown_entity_set("Orders");
        assert!(!err.is_configuration());
        assert_eq!(err.status(), StatusCode::NotFound);
    }

    #[test]
    fn messages_name_the_offending_field() {
        let err = ODataError::unrecognized_type("Order", "meta", "serde_json::Value");
        let text = err.to_string();
        assert!(text.contains("meta"));
        assert!(text.contains("Order"));
        assert!(text.contains("serde_json::Value"));
    }
}

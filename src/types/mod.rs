pub mod conversion;
pub mod units;

pub use conversion::*;

// Re-export nalgebra
pub use nalgebra as na;

/// Two-component `f64` vector used by the planar types
pub type Vector2 = na::Vector2<f64>;

/// Failures of the dynamic comparison contract.
///
/// Only `Quantity::compare_to` produces these; no other operation in the
/// crate can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("Cannot compare {expected} against a missing value")]
    NullArgument { expected: &'static str },

    #[error("Expected type {expected}, found another type")]
    TypeMismatch { expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_expected_type() {
        let null = QuantityError::NullArgument { expected: "Volume" };
        assert_eq!(null.to_string(), "Cannot compare Volume against a missing value");

        let boxed: Box<dyn std::error::Error> = Box::new(QuantityError::TypeMismatch { expected: "Length" });
        assert_eq!(boxed.to_string(), "Expected type Length, found another type");
    }
}

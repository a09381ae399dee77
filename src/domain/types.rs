//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers) so
//! that once a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided identifier does not fit the storage type.
    #[error("id is out of range")]
    IdOutOfRange,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                let value = i32::try_from(value).map_err(|_| TypeConstraintError::IdOutOfRange)?;
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ProductId, "Unique identifier for a product.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_non_positive_values() {
        assert_eq!(ProductId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProductId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProductId::new(7).map(ProductId::get), Ok(7));
    }

    #[test]
    fn product_id_from_u64_checks_range() {
        assert_eq!(
            ProductId::try_from(u64::from(u32::MAX)),
            Err(TypeConstraintError::IdOutOfRange)
        );
        assert_eq!(ProductId::try_from(12_u64).map(i32::from), Ok(12));
    }
}

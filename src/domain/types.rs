//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, known
//! operation codes) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Operation type code is not one of `A`, `RP` or `RT`.
    #[error("unknown operation type: {0}")]
    UnknownOperationType(String),
}

/// Macro to generate newtypes for identifiers issued by the remote service.
///
/// The value is kept verbatim so equality stays exact; only blank input is
/// rejected.
macro_rules! code_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wraps the value, rejecting blank strings.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

code_newtype!(TicketCode, "Code identifying a single boleta.");
code_newtype!(ClientId, "Identifier of a client as issued by the remote service.");
code_newtype!(FundId, "Identifier of an investment fund as issued by the remote service.");

/// Identifier of a ticket processing status (situação).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SituationId(i32);

impl SituationId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for SituationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SituationId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<SituationId> for i32 {
    fn from(value: SituationId) -> Self {
        value.0
    }
}

/// Kind of fund-share movement recorded by a boleta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationType {
    /// Aplicação.
    Application,
    /// Resgate parcial.
    PartialRedemption,
    /// Resgate total.
    TotalRedemption,
}

impl OperationType {
    /// All operation types in the order they are offered to the user.
    pub const ALL: [OperationType; 3] = [
        OperationType::Application,
        OperationType::PartialRedemption,
        OperationType::TotalRedemption,
    ];

    /// Wire code used by the remote service.
    pub const fn code(self) -> &'static str {
        match self {
            OperationType::Application => "A",
            OperationType::PartialRedemption => "RP",
            OperationType::TotalRedemption => "RT",
        }
    }

    /// Human readable label shown in the UI.
    pub const fn label(self) -> &'static str {
        match self {
            OperationType::Application => "Aplicação",
            OperationType::PartialRedemption => "Resgate Parcial",
            OperationType::TotalRedemption => "Resgate Total",
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OperationType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(OperationType::Application),
            "RP" => Ok(OperationType::PartialRedemption),
            "RT" => Ok(OperationType::TotalRedemption),
            other => Err(TypeConstraintError::UnknownOperationType(other.to_string())),
        }
    }
}

impl TryFrom<String> for OperationType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationType> for String {
    fn from(value: OperationType) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_newtype_rejects_blank_values() {
        assert_eq!(TicketCode::new("  "), Err(TypeConstraintError::EmptyString));
        assert_eq!(ClientId::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn code_newtype_keeps_value_verbatim() {
        let code = TicketCode::new(" 42").expect("valid code");
        assert_eq!(code.as_str(), " 42");
        assert_ne!(code, TicketCode::new("42").expect("valid code"));
    }

    #[test]
    fn operation_type_round_trips_codes() {
        for op in OperationType::ALL {
            assert_eq!(op.code().parse::<OperationType>(), Ok(op));
        }
        assert_eq!(
            "rp".parse::<OperationType>(),
            Err(TypeConstraintError::UnknownOperationType("rp".to_string()))
        );
    }

    #[test]
    fn operation_type_deserializes_from_wire_code() {
        let op: OperationType = serde_json::from_str("\"RT\"").expect("valid code");
        assert_eq!(op, OperationType::TotalRedemption);
        assert_eq!(serde_json::to_string(&op).expect("serializes"), "\"RT\"");
    }
}

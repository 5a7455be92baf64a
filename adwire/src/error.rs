//! Validation errors, and the crate-wide error type.
//!
//! Malformed input surfaces as [`DecodeError`] straight from `prost`. Input that
//! decodes but breaks a schema rule surfaces as a [`ValidationError`], which
//! carries every violation found rather than stopping at the first.

use std::error::Error as StdError;
use std::fmt;

use prost::DecodeError;

use crate::ads::enums::{AdvertisingChannelSubType, AdvertisingChannelType, BiddingStrategyType};
use crate::ads::resource_name::ResourceNameError;

/// The reason a field is invalid.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ViolationKind {
    /// The field must be set.
    Required,
    /// The field is set but empty.
    Empty,
    /// The string contains a character the field forbids.
    DisallowedCharacter(char),
    /// An enum field holds a value its enum does not declare.
    UnknownEnumValue(i32),
    /// The sub-type does not refine the campaign's channel type.
    SubTypeMismatch {
        channel: AdvertisingChannelType,
        sub_type: AdvertisingChannelSubType,
    },
    /// The stored bidding strategy type disagrees with the active strategy.
    StrategyTypeMismatch {
        stored: BiddingStrategyType,
        derived: BiddingStrategyType,
    },
    /// The resource name cannot be parsed.
    InvalidResourceName(ResourceNameError),
    /// The resource name and the `id` field name different campaigns.
    IdMismatch { resource_name_id: i64, id: i64 },
    /// The value does not have the expected textual form.
    Malformed { expected: &'static str },
    /// A numeric value is outside its allowed range.
    OutOfRange { expected: &'static str },
    /// The end of a range precedes its start.
    EndBeforeStart,
    /// A field computed by the server was written by the client.
    ReadOnly,
    /// A field that is fixed after creation was changed.
    Immutable,
    /// The campaign is removed and can no longer change.
    Removed,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Required => f.write_str("field is required"),
            ViolationKind::Empty => f.write_str("must not be empty"),
            ViolationKind::DisallowedCharacter(c) => {
                write!(f, "contains disallowed character U+{:04X}", *c as u32)
            }
            ViolationKind::UnknownEnumValue(value) => write!(f, "unknown enum value: {}", value),
            ViolationKind::SubTypeMismatch { channel, sub_type } => write!(
                f,
                "{} is not a sub-type of {}",
                sub_type.as_str_name(),
                channel.as_str_name()
            ),
            ViolationKind::StrategyTypeMismatch { stored, derived } => write!(
                f,
                "stored {} does not match active strategy {}",
                stored.as_str_name(),
                derived.as_str_name()
            ),
            ViolationKind::InvalidResourceName(error) => {
                write!(f, "invalid resource name: {}", error)
            }
            ViolationKind::IdMismatch {
                resource_name_id,
                id,
            } => write!(
                f,
                "resource name refers to campaign {} but id is {}",
                resource_name_id, id
            ),
            ViolationKind::Malformed { expected } => write!(f, "expected {}", expected),
            ViolationKind::OutOfRange { expected } => write!(f, "out of range, expected {}", expected),
            ViolationKind::EndBeforeStart => f.write_str("ends before it starts"),
            ViolationKind::ReadOnly => f.write_str("is set by the server"),
            ViolationKind::Immutable => f.write_str("cannot change after creation"),
            ViolationKind::Removed => f.write_str("campaign is removed"),
        }
    }
}

/// A single broken rule, located by a dotted field path such as
/// `shopping_setting.campaign_priority`.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Violation {
        Violation {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// A well-formed message that breaks one or more schema rules.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Every violation found, in the order the checks ran.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether some violation is reported for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {}

/// Collects violations while a message is checked.
#[derive(Debug, Default)]
pub(crate) struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub(crate) fn push(&mut self, field: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation::new(field, kind));
    }

    pub(crate) fn finish(self, message: &'static str) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        log::debug!(
            "{} failed validation with {} violation(s)",
            message,
            self.violations.len()
        );
        Err(ValidationError {
            violations: self.violations,
        })
    }
}

/// Any failure produced by this crate.
#[derive(Debug)]
pub enum Error {
    /// The bytes are not a well-formed encoding of the message.
    Decode(DecodeError),
    /// The message decoded but is not valid.
    Validation(ValidationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(error) => fmt::Display::fmt(error, f),
            Error::Validation(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Decode(error) => Some(error),
            Error::Validation(error) => Some(error),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Error {
        Error::Decode(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Error {
        Error::Validation(error)
    }
}

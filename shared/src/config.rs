use std::str::FromStr;

use crate::SignupError;

pub const MISSING_USER_ATTRIBUTES_VAR: &str = "MISSING_USER_ATTRIBUTES";

/// What to do with an event whose request carries no user attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingAttributesPolicy {
    /// Carry on as if the user supplied no attributes at all
    #[default]
    TreatAsEmpty,
    /// Fail the invocation, which fails the sign-up
    Reject,
}

impl FromStr for MissingAttributesPolicy {
    type Err = SignupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(MissingAttributesPolicy::TreatAsEmpty),
            "reject" => Ok(MissingAttributesPolicy::Reject),
            other => Err(SignupError::Configuration(format!(
                "{} must be 'empty' or 'reject', got '{}'",
                MISSING_USER_ATTRIBUTES_VAR, other
            ))),
        }
    }
}

/// Handler configuration, read once per cold start
#[derive(Debug, Clone, Default)]
pub struct HandlerConfig {
    pub missing_attributes: MissingAttributesPolicy,
}

impl HandlerConfig {
    /// Create handler config from the Lambda environment variables set at deploy time
    pub fn from_env() -> Result<Self, SignupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create handler config from an arbitrary variable lookup.
    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SignupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing_attributes = match non_blank(MISSING_USER_ATTRIBUTES_VAR) {
            Some(value) => value.parse()?,
            None => MissingAttributesPolicy::default(),
        };

        Ok(Self { missing_attributes })
    }
}

use aws_lambda_events::event::cognito::CognitoEventUserPoolsCallerContext;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const EMAIL_ATTRIBUTE: &str = "email";
pub const PHONE_NUMBER_ATTRIBUTE: &str = "phone_number";

/// Pre sign-up trigger event as Cognito sends it.
///
/// The response flags are optional so that an unset flag is omitted from the
/// returned payload instead of being sent back as `false`. Fields that are not
/// modelled here are kept in `extra` and returned as they came in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreSignUpEvent {
    #[serde(flatten)]
    pub header: PreSignUpHeader,
    #[serde(default)]
    pub request: PreSignUpRequest,
    #[serde(default)]
    pub response: PreSignUpResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Common user pool trigger fields. Only read for logging, so all of them are
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreSignUpHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_context: Option<CognitoEventUserPoolsCallerContext>,
}

// validationData and clientMetadata are often null, they ride along in extra
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreSignUpRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<HashMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreSignUpResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_confirm_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_verify_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_verify_phone: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the trigger decided for a single sign-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupDecision {
    pub confirmed: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
}

impl PreSignUpRequest {
    /// Names of the supplied attributes, sorted. Values are left out so the
    /// result is safe to log.
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .user_attributes
            .iter()
            .flat_map(|attributes| attributes.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }
}

impl PreSignUpResponse {
    /// Write a decision into the response. Flags the decision does not grant
    /// are left as they were.
    pub fn apply(&mut self, decision: SignupDecision) {
        if decision.confirmed {
            self.auto_confirm_user = Some(true);
        }
        if decision.email_verified {
            self.auto_verify_email = Some(true);
        }
        if decision.phone_verified {
            self.auto_verify_phone = Some(true);
        }
    }
}

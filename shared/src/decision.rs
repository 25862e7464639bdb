use std::collections::HashMap;
use tracing::{debug, warn};

use crate::{
    HandlerConfig, MissingAttributesPolicy, PreSignUpEvent, SignupDecision, SignupError,
    SignupResult, EMAIL_ATTRIBUTE, PHONE_NUMBER_ATTRIBUTE,
};

impl SignupDecision {
    /// Every sign-up is confirmed. Email and phone are verified when the
    /// attribute was supplied, whatever its value.
    pub fn for_attributes(attributes: &HashMap<String, String>) -> Self {
        Self {
            confirmed: true,
            email_verified: attributes.contains_key(EMAIL_ATTRIBUTE),
            phone_verified: attributes.contains_key(PHONE_NUMBER_ATTRIBUTE),
        }
    }
}

/// Auto-confirm the user and auto-verify whichever contact attributes were
/// supplied, writing the result into the event's response.
pub fn handle_pre_signup(
    event: &mut PreSignUpEvent,
    config: &HandlerConfig,
) -> SignupResult<SignupDecision> {
    let decision = match &event.request.user_attributes {
        Some(attributes) => SignupDecision::for_attributes(attributes),
        None => match config.missing_attributes {
            MissingAttributesPolicy::Reject => return Err(SignupError::MissingUserAttributes),
            MissingAttributesPolicy::TreatAsEmpty => {
                warn!(
                    "No user attributes for {:?}, treating as empty",
                    event.header.user_name
                );
                SignupDecision::for_attributes(&HashMap::new())
            }
        },
    };

    debug!("Decision for {:?}: {:?}", event.header.user_name, decision);
    event.response.apply(decision);

    Ok(decision)
}

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use signup_shared::{handle_pre_signup, HandlerConfig, PreSignUpEvent};

async fn function_handler(
    event: LambdaEvent<PreSignUpEvent>,
    config: &HandlerConfig,
) -> Result<PreSignUpEvent, Error> {
    let mut response_event = event.payload;

    info!(
        "Pre-signup trigger {:?} for user {:?} with attributes {:?}",
        response_event.header.trigger_source,
        response_event.header.user_name,
        response_event.request.attribute_names()
    );

    match handle_pre_signup(&mut response_event, config) {
        Ok(decision) => {
            info!(
                "Auto-confirmed user {:?} (email verified: {}, phone verified: {})",
                response_event.header.user_name, decision.email_verified, decision.phone_verified
            );
            Ok(response_event)
        }
        Err(e) => {
            // Failing the invocation makes Cognito reject the sign-up
            error!(
                "Failed to handle pre-signup for {:?}: {}",
                response_event.header.user_name, e
            );
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing, level from RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = HandlerConfig::from_env()?;
    info!(
        "Starting pre-signup Lambda function - missing attributes policy: {:?}",
        config.missing_attributes
    );

    let config = &config;
    run(service_fn(move |event| function_handler(event, config))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;
    use signup_shared::MissingAttributesPolicy;

    fn lambda_event(user_attributes: serde_json::Value) -> LambdaEvent<PreSignUpEvent> {
        let payload = serde_json::from_value(json!({
            "version": "1",
            "triggerSource": "PreSignUp_SignUp",
            "region": "us-east-1",
            "userPoolId": "us-east-1_example",
            "userName": "bob",
            "callerContext": {
                "awsSdkVersion": "aws-sdk-unknown-unknown",
                "clientId": "exampleclientid"
            },
            "request": { "userAttributes": user_attributes },
            "response": {}
        }))
        .unwrap();

        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn test_handler_confirms_and_verifies() {
        let event = lambda_event(json!({ "email": "a@b.com", "phone_number": "+15551234" }));

        let output = function_handler(event, &HandlerConfig::default())
            .await
            .unwrap();

        assert_eq!(output.response.auto_confirm_user, Some(true));
        assert_eq!(output.response.auto_verify_email, Some(true));
        assert_eq!(output.response.auto_verify_phone, Some(true));
    }

    #[tokio::test]
    async fn test_handler_leaves_unsupplied_flags_unset() {
        let event = lambda_event(json!({ "username": "bob" }));

        let output = function_handler(event, &HandlerConfig::default())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&output.response).unwrap(),
            json!({ "autoConfirmUser": true })
        );
    }

    #[tokio::test]
    async fn test_handler_fails_invocation_when_rejecting() {
        let config = HandlerConfig {
            missing_attributes: MissingAttributesPolicy::Reject,
        };

        let result = function_handler(lambda_event(serde_json::Value::Null), &config).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("User attributes missing"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("User attributes missing from pre sign-up request")]
    MissingUserAttributes,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type SignupResult<T> = Result<T, SignupError>;

use thiserror::Error;

use crate::templates::NotificationKind;

/// Coarse classification of a [`WnsError`].
///
/// `Validation` failures are recoverable: the caller corrects its input and
/// tries again. `Fatal` failures mean the client cannot continue without
/// outside intervention (bad credentials, send before authenticate, no usable
/// http client); the embedding application decides whether that ends the
/// process.
///
/// Transport failures and non-200 delivery responses are not errors: they
/// surface as `Ok(false)` from `authenticate` and the send methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Fatal,
}

/// WNS client error types
#[derive(Error, Debug)]
pub enum WnsError {
    #[error("payload is empty or too short")]
    EmptyPayload,

    #[error("required field '{0}' is not set")]
    MissingField(&'static str),

    #[error("unknown toast template '{0}'")]
    UnknownTemplate(String),

    #[error("no toast template selected")]
    TemplateNotSelected,

    #[error("toast template requires {expected} text fields, {supplied} supplied")]
    ArityMismatch { expected: usize, supplied: usize },

    #[error("unknown toast sound '{0}'")]
    UnknownSound(String),

    #[error("{0} notification was not built")]
    NotBuilt(NotificationKind),

    #[error("channel uri is too short ({len} < {min} chars)")]
    UriTooShort { len: usize, min: usize },

    #[error("authentication rejected with status {status}")]
    AuthenticationRejected { status: u16 },

    #[error("failed to parse authentication response: {0}")]
    MalformedAuthResponse(String),

    #[error("not authenticated, call authenticate() first")]
    NotAuthenticated,

    #[error("bearer token has expired")]
    TokenExpired,

    #[error("re-authentication failed")]
    ReauthenticationFailed,

    #[error("failed to build http client: {0}")]
    HttpClient(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WnsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WnsError::EmptyPayload
            | WnsError::MissingField(_)
            | WnsError::UnknownTemplate(_)
            | WnsError::TemplateNotSelected
            | WnsError::ArityMismatch { .. }
            | WnsError::UnknownSound(_)
            | WnsError::NotBuilt(_)
            | WnsError::UriTooShort { .. }
            | WnsError::Config(_) => ErrorKind::Validation,
            WnsError::AuthenticationRejected { .. }
            | WnsError::MalformedAuthResponse(_)
            | WnsError::NotAuthenticated
            | WnsError::TokenExpired
            | WnsError::ReauthenticationFailed
            | WnsError::HttpClient(_) => ErrorKind::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }
}

pub type WnsResult<T> = Result<T, WnsError>;

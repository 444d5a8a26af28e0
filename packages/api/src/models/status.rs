//! Typed outcomes of the status-code driven auth endpoints.

/// Status code the service uses to ask for a second factor.
pub const STATUS_TWO_FACTOR_REQUIRED: u16 = 600;

/// Result of `POST /auth/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// 200: the session cookie is set.
    Ok,
    /// 600: credentials accepted, a 2FA code must follow.
    TwoFactorRequired,
    /// 403: bad credentials.
    Forbidden,
    Other(u16),
}

impl From<u16> for LoginStatus {
    fn from(code: u16) -> Self {
        match code {
            200 => LoginStatus::Ok,
            STATUS_TWO_FACTOR_REQUIRED => LoginStatus::TwoFactorRequired,
            403 => LoginStatus::Forbidden,
            other => LoginStatus::Other(other),
        }
    }
}

/// Result of `POST /auth/register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    /// 201
    Created,
    Failed(u16),
}

impl From<u16> for RegisterStatus {
    fn from(code: u16) -> Self {
        if code == 201 {
            RegisterStatus::Created
        } else {
            RegisterStatus::Failed(code)
        }
    }
}

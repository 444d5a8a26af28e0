//! State machine and network flows behind the auth modal.
//!
//! The submit functions validate their input first and return without touching
//! the network when validation fails. Their outcomes are folded into
//! [`AuthModal`] by the `apply_*` methods, which decide the next mode and the
//! notice to show.

use api::{AccountApi, LoginStatus, RegisterStatus, UserInfo};

use crate::notice::{Notice, GENERIC_FAILURE};

/// Number of digits in a 2FA code.
pub const TWO_FACTOR_CODE_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    /// Waiting for the code sent to `email`.
    TwoFactor { email: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthModal {
    pub mode: AuthMode,
    /// A request is in flight; further submissions are ignored.
    pub busy: bool,
}

impl Default for AuthModal {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            busy: false,
        }
    }
}

/// What the component does after an outcome has been applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Stay(Option<Notice>),
    /// Write the user into the session and close the modal.
    Close(UserInfo),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Invalid(Notice),
    TwoFactorRequired { email: String },
    SignedIn(UserInfo),
    Failed(Notice),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegisterOutcome {
    Invalid(Notice),
    Created,
    Failed(Notice),
}

#[derive(Clone, Debug, PartialEq)]
pub enum TwoFactorOutcome {
    Invalid(Notice),
    SignedIn(UserInfo),
    Failed(Notice),
}

impl AuthModal {
    /// Switch between login and registration. Ignored during a 2FA challenge.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
            AuthMode::TwoFactor { .. } => return,
        };
    }

    /// Mark a request as started. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn apply_login(&mut self, outcome: LoginOutcome) -> Transition {
        self.busy = false;
        match outcome {
            LoginOutcome::SignedIn(user) => Transition::Close(user),
            LoginOutcome::TwoFactorRequired { email } => {
                self.mode = AuthMode::TwoFactor { email };
                Transition::Stay(None)
            }
            LoginOutcome::Invalid(notice) | LoginOutcome::Failed(notice) => {
                Transition::Stay(Some(notice))
            }
        }
    }

    pub fn apply_register(&mut self, outcome: RegisterOutcome) -> Transition {
        self.busy = false;
        match outcome {
            RegisterOutcome::Created => {
                self.mode = AuthMode::Login;
                Transition::Stay(Some(Notice::success(
                    "Account created. You can now sign in.",
                )))
            }
            RegisterOutcome::Invalid(notice) | RegisterOutcome::Failed(notice) => {
                Transition::Stay(Some(notice))
            }
        }
    }

    pub fn apply_two_factor(&mut self, outcome: TwoFactorOutcome) -> Transition {
        self.busy = false;
        match outcome {
            TwoFactorOutcome::SignedIn(user) => Transition::Close(user),
            TwoFactorOutcome::Invalid(notice) | TwoFactorOutcome::Failed(notice) => {
                Transition::Stay(Some(notice))
            }
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

async fn fetch_signed_in_user<A: AccountApi>(api: &A) -> Result<UserInfo, Notice> {
    match api.get_user_info().await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            tracing::warn!("Authenticated but no current user was returned");
            Err(Notice::error(GENERIC_FAILURE))
        }
        Err(e) => {
            tracing::warn!("Fetching current user failed: {}", e);
            Err(Notice::error(GENERIC_FAILURE))
        }
    }
}

pub async fn submit_login<A: AccountApi>(api: &A, email: &str, password: &str) -> LoginOutcome {
    if is_blank(email) || is_blank(password) {
        return LoginOutcome::Invalid(Notice::error("Please enter your email and password"));
    }

    let email = email.trim();
    match api.login(email, password).await {
        Ok(LoginStatus::Ok) => match fetch_signed_in_user(api).await {
            Ok(user) => LoginOutcome::SignedIn(user),
            Err(notice) => LoginOutcome::Failed(notice),
        },
        Ok(LoginStatus::TwoFactorRequired) => LoginOutcome::TwoFactorRequired {
            email: email.to_string(),
        },
        Ok(LoginStatus::Forbidden) => {
            LoginOutcome::Failed(Notice::error("Invalid email or password"))
        }
        Ok(LoginStatus::Other(code)) => {
            tracing::warn!("Login answered unexpected status {}", code);
            LoginOutcome::Failed(Notice::error(GENERIC_FAILURE))
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            LoginOutcome::Failed(Notice::error(GENERIC_FAILURE))
        }
    }
}

pub async fn submit_register<A: AccountApi>(
    api: &A,
    username: &str,
    email: &str,
    password: &str,
    repeat_password: &str,
) -> RegisterOutcome {
    if [username, email, password, repeat_password].iter().any(|f| is_blank(f)) {
        return RegisterOutcome::Invalid(Notice::error("Please fill in all fields"));
    }
    if password != repeat_password {
        return RegisterOutcome::Invalid(Notice::error("Passwords do not match"));
    }

    match api.register(username.trim(), email.trim(), password).await {
        Ok(RegisterStatus::Created) => RegisterOutcome::Created,
        Ok(RegisterStatus::Failed(code)) => {
            tracing::warn!("Registration answered status {}", code);
            RegisterOutcome::Failed(Notice::error("Registration failed. Please try again."))
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            RegisterOutcome::Failed(Notice::error("Registration failed. Please try again."))
        }
    }
}

/// A 2FA code is exactly six ASCII digits, surrounding whitespace ignored.
pub fn is_valid_code(code: &str) -> bool {
    let code = code.trim();
    code.len() == TWO_FACTOR_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

pub async fn submit_2fa<A: AccountApi>(api: &A, email: &str, code: &str) -> TwoFactorOutcome {
    if !is_valid_code(code) {
        return TwoFactorOutcome::Invalid(Notice::error("Enter the 6-digit code"));
    }

    match api.verify_2fa(email, code.trim()).await {
        Ok(true) => match fetch_signed_in_user(api).await {
            Ok(user) => TwoFactorOutcome::SignedIn(user),
            Err(notice) => TwoFactorOutcome::Failed(notice),
        },
        Ok(false) => TwoFactorOutcome::Failed(Notice::error("Invalid verification code")),
        Err(e) => {
            tracing::warn!("2FA verification failed: {}", e);
            TwoFactorOutcome::Failed(Notice::error(GENERIC_FAILURE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiCall, MemoryApi};

    fn ada() -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "ada".into(),
            email: Some("ada@example.com".into()),
            avatar_url: None,
        }
    }

    const BLANKS: [&str; 4] = ["", " ", "\t", "  \n "];

    #[tokio::test]
    async fn login_with_blank_fields_makes_no_call() {
        let api = MemoryApi::new().with_current_user(Some(ada()));
        for email in BLANKS.iter().chain(["ada@example.com"].iter()) {
            for password in BLANKS.iter().chain(["secret"].iter()) {
                if !is_blank(email) && !is_blank(password) {
                    continue;
                }
                let outcome = submit_login(&api, email, password).await;
                assert!(matches!(outcome, LoginOutcome::Invalid(_)), "{email:?}/{password:?}");
            }
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn register_with_blank_fields_makes_no_call() {
        let api = MemoryApi::new();
        let valid = ["ada", "ada@example.com", "pw", "pw"];
        for field in 0..valid.len() {
            for blank in BLANKS {
                let mut fields = valid;
                fields[field] = blank;
                let outcome =
                    submit_register(&api, fields[0], fields[1], fields[2], fields[3]).await;
                assert!(matches!(outcome, RegisterOutcome::Invalid(_)));
            }
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn register_password_mismatch_is_reported_without_a_call() {
        let api = MemoryApi::new();
        let outcome = submit_register(&api, "ada", "ada@example.com", "one", "two").await;
        assert_eq!(
            outcome,
            RegisterOutcome::Invalid(Notice::error("Passwords do not match"))
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn login_requiring_2fa_moves_to_challenge_silently() {
        let api = MemoryApi::new().with_login(LoginStatus::TwoFactorRequired);
        let mut modal = AuthModal::default();

        let outcome = submit_login(&api, " ada@example.com ", "pw").await;
        let transition = modal.apply_login(outcome);

        assert_eq!(transition, Transition::Stay(None));
        assert_eq!(
            modal.mode,
            AuthMode::TwoFactor {
                email: "ada@example.com".into()
            }
        );
        assert_eq!(api.calls(), vec![ApiCall::Login { email: "ada@example.com".into() }]);
    }

    #[tokio::test]
    async fn successful_login_closes_with_fetched_user() {
        let api = MemoryApi::new().with_current_user(Some(ada()));
        let mut modal = AuthModal::default();
        assert!(modal.begin());

        let transition = modal.apply_login(submit_login(&api, "ada@example.com", "pw").await);

        assert_eq!(transition, Transition::Close(ada()));
        assert!(!modal.busy);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Login { email: "ada@example.com".into() },
                ApiCall::GetUserInfo
            ]
        );
    }

    #[tokio::test]
    async fn login_ok_without_a_user_is_a_failure() {
        let api = MemoryApi::new();
        let outcome = submit_login(&api, "ada@example.com", "pw").await;
        assert_eq!(outcome, LoginOutcome::Failed(Notice::error(GENERIC_FAILURE)));
    }

    #[tokio::test]
    async fn forbidden_and_unexpected_statuses() {
        let api = MemoryApi::new().with_login(LoginStatus::Forbidden);
        let outcome = submit_login(&api, "ada@example.com", "pw").await;
        assert_eq!(
            outcome,
            LoginOutcome::Failed(Notice::error("Invalid email or password"))
        );

        let api = MemoryApi::new().with_login(LoginStatus::Other(500));
        let outcome = submit_login(&api, "ada@example.com", "pw").await;
        assert_eq!(outcome, LoginOutcome::Failed(Notice::error(GENERIC_FAILURE)));
    }

    #[tokio::test]
    async fn network_failure_keeps_login_mode() {
        let api = MemoryApi::new();
        api.set_offline(true);
        let mut modal = AuthModal::default();

        let transition = modal.apply_login(submit_login(&api, "ada@example.com", "pw").await);

        assert_eq!(transition, Transition::Stay(Some(Notice::error(GENERIC_FAILURE))));
        assert_eq!(modal.mode, AuthMode::Login);
    }

    #[tokio::test]
    async fn registration_returns_to_login_with_notice() {
        let api = MemoryApi::new();
        let mut modal = AuthModal::default();
        modal.toggle_mode();
        assert_eq!(modal.mode, AuthMode::Register);

        let outcome = submit_register(&api, "ada", "ada@example.com", "pw", "pw").await;
        let transition = modal.apply_register(outcome);

        assert_eq!(modal.mode, AuthMode::Login);
        assert!(matches!(transition, Transition::Stay(Some(ref n)) if !n.is_error()));
    }

    #[tokio::test]
    async fn failed_registration_stays_in_register_mode() {
        let api = MemoryApi::new().with_register(RegisterStatus::Failed(409));
        let mut modal = AuthModal {
            mode: AuthMode::Register,
            busy: false,
        };
        let outcome = submit_register(&api, "ada", "ada@example.com", "pw", "pw").await;
        let transition = modal.apply_register(outcome);

        assert_eq!(modal.mode, AuthMode::Register);
        assert!(matches!(transition, Transition::Stay(Some(ref n)) if n.is_error()));
    }

    #[tokio::test]
    async fn short_or_non_numeric_codes_make_no_call() {
        let api = MemoryApi::new().with_current_user(Some(ada()));
        for code in ["", "12345", "1234567", "12a456", "      "] {
            let outcome = submit_2fa(&api, "ada@example.com", code).await;
            assert!(matches!(outcome, TwoFactorOutcome::Invalid(_)), "{code:?}");
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn correct_code_signs_in() {
        let api = MemoryApi::new().with_current_user(Some(ada()));
        let mut modal = AuthModal {
            mode: AuthMode::TwoFactor {
                email: "ada@example.com".into(),
            },
            busy: true,
        };

        let outcome = submit_2fa(&api, "ada@example.com", " 123456 ").await;
        assert_eq!(modal.apply_two_factor(outcome), Transition::Close(ada()));
        assert_eq!(
            api.calls()[0],
            ApiCall::VerifyTwoFactor {
                email: "ada@example.com".into(),
                code: "123456".into()
            }
        );
    }

    #[tokio::test]
    async fn wrong_code_is_reported() {
        let api = MemoryApi::new().with_two_factor(false);
        let outcome = submit_2fa(&api, "ada@example.com", "000000").await;
        assert_eq!(
            outcome,
            TwoFactorOutcome::Failed(Notice::error("Invalid verification code"))
        );
    }

    #[test]
    fn toggle_is_ignored_during_challenge_and_busy_blocks_resubmission() {
        let mut modal = AuthModal {
            mode: AuthMode::TwoFactor {
                email: "a@b.c".into(),
            },
            busy: false,
        };
        modal.toggle_mode();
        assert!(matches!(modal.mode, AuthMode::TwoFactor { .. }));

        assert!(modal.begin());
        assert!(!modal.begin());
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::AccountApi;
use crate::error::{ApiError, Result};
use crate::models::{LoginStatus, Profile, RegisterStatus, SettingsUpdate, UserInfo};

/// One recorded call against a [`MemoryApi`]. Secrets are not recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Register { username: String, email: String },
    Login { email: String },
    VerifyTwoFactor { email: String, code: String },
    GetUserInfo,
    GetUserProfile { user_id: String },
    UpdateSettings(SettingsUpdate),
    UpdateAvatar { bytes: usize },
    Logout,
}

#[derive(Debug)]
struct Script {
    register: RegisterStatus,
    login: LoginStatus,
    two_factor: bool,
    current_user: Option<UserInfo>,
    profiles: HashMap<String, Profile>,
    settings_ok: bool,
    avatar_ok: bool,
    offline: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            register: RegisterStatus::Created,
            login: LoginStatus::Ok,
            two_factor: true,
            current_user: None,
            profiles: HashMap::new(),
            settings_ok: true,
            avatar_ok: true,
            offline: false,
        }
    }
}

/// In-memory [`AccountApi`] with scripted answers, for tests and offline demos.
///
/// Every call is appended to a log readable through [`MemoryApi::calls`].
/// A successful `update_settings` also rewrites the stored profile of the
/// current user, so a re-fetch observes the change.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call);
        if self.script().offline {
            return Err(ApiError::Timeout);
        }
        Ok(())
    }

    pub fn with_register(self, status: RegisterStatus) -> Self {
        self.script().register = status;
        self
    }

    pub fn with_login(self, status: LoginStatus) -> Self {
        self.script().login = status;
        self
    }

    pub fn with_two_factor(self, accepted: bool) -> Self {
        self.script().two_factor = accepted;
        self
    }

    pub fn with_current_user(self, user: Option<UserInfo>) -> Self {
        self.script().current_user = user;
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.script().profiles.insert(profile.id.clone(), profile);
        self
    }

    pub fn with_settings_result(self, ok: bool) -> Self {
        self.script().settings_ok = ok;
        self
    }

    pub fn with_avatar_result(self, ok: bool) -> Self {
        self.script().avatar_ok = ok;
        self
    }

    /// Every call fails with [`ApiError::Timeout`] while offline.
    pub fn set_offline(&self, offline: bool) {
        self.script().offline = offline;
    }

    /// All calls made so far, oldest first.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl AccountApi for MemoryApi {
    async fn register(&self, username: &str, email: &str, _password: &str) -> Result<RegisterStatus> {
        self.record(ApiCall::Register {
            username: username.to_string(),
            email: email.to_string(),
        })?;
        Ok(self.script().register)
    }

    async fn login(&self, email: &str, _password: &str) -> Result<LoginStatus> {
        self.record(ApiCall::Login {
            email: email.to_string(),
        })?;
        Ok(self.script().login)
    }

    async fn verify_2fa(&self, email: &str, code: &str) -> Result<bool> {
        self.record(ApiCall::VerifyTwoFactor {
            email: email.to_string(),
            code: code.to_string(),
        })?;
        Ok(self.script().two_factor)
    }

    async fn get_user_info(&self) -> Result<Option<UserInfo>> {
        self.record(ApiCall::GetUserInfo)?;
        Ok(self.script().current_user.clone())
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Profile> {
        self.record(ApiCall::GetUserProfile {
            user_id: user_id.to_string(),
        })?;
        self.script()
            .profiles
            .get(user_id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<bool> {
        self.record(ApiCall::UpdateSettings(update.clone()))?;
        let mut script = self.script();
        if !script.settings_ok {
            return Ok(false);
        }
        let own_id = script.current_user.as_ref().map(|u| u.id.clone());
        if let Some(profile) = own_id.and_then(|id| script.profiles.get_mut(&id)) {
            profile.username = update.username.clone();
            profile.description = update.description.clone();
        }
        Ok(true)
    }

    async fn update_avatar(&self, png: &[u8]) -> Result<bool> {
        self.record(ApiCall::UpdateAvatar { bytes: png.len() })?;
        Ok(self.script().avatar_ok)
    }

    async fn logout(&self) -> Result<()> {
        self.record(ApiCall::Logout)?;
        self.script().current_user = None;
        Ok(())
    }
}

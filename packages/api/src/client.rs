//! # The account API and its HTTP implementation
//!
//! [`AccountApi`] is the seam between the views and the network. Views are
//! generic over it, the desktop shell injects an [`HttpApi`], and tests inject a
//! [`MemoryApi`](crate::MemoryApi).
//!
//! ## Endpoints
//!
//! | Method | Request | Outcome |
//! |--------|---------|---------|
//! | [`register`](AccountApi::register) | `POST /auth/register` | [`RegisterStatus`] from the status code |
//! | [`login`](AccountApi::login) | `POST /auth/login` | [`LoginStatus`] from the status code |
//! | [`verify_2fa`](AccountApi::verify_2fa) | `POST /auth/2fa` | `true` on 2xx |
//! | [`get_user_info`](AccountApi::get_user_info) | `GET /auth/me` | `None` on 401/403/404 |
//! | [`get_user_profile`](AccountApi::get_user_profile) | `GET /users/{id}/profile` | [`Profile`], `Status` error otherwise |
//! | [`update_settings`](AccountApi::update_settings) | `PUT /users/me/settings` | `true` on 2xx |
//! | [`update_avatar`](AccountApi::update_avatar) | `PUT /users/me/avatar` (`image/png`) | `true` on 2xx |
//! | [`logout`](AccountApi::logout) | `POST /auth/logout` | `Status` error on non-2xx |
//!
//! Status codes the caller has to interpret are returned as values, never as
//! errors. Errors are reserved for transport failures, timeouts and responses
//! the call cannot make sense of.

use std::future::Future;

use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::{LoginStatus, Profile, RegisterStatus, SettingsUpdate, UserInfo};

/// Async interface to the Rulehub account endpoints.
pub trait AccountApi {
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<RegisterStatus>>;
    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<LoginStatus>>;
    fn verify_2fa(&self, email: &str, code: &str) -> impl Future<Output = Result<bool>>;
    fn get_user_info(&self) -> impl Future<Output = Result<Option<UserInfo>>>;
    fn get_user_profile(&self, user_id: &str) -> impl Future<Output = Result<Profile>>;
    fn update_settings(&self, update: &SettingsUpdate) -> impl Future<Output = Result<bool>>;
    fn update_avatar(&self, png: &[u8]) -> impl Future<Output = Result<bool>>;
    fn logout(&self) -> impl Future<Output = Result<()>>;
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct TwoFactorBody<'a> {
    email: &'a str,
    code: &'a str,
}

/// [`AccountApi`] over HTTP.
///
/// Cheap to clone: clones share the connection pool and the cookie store that
/// carries the session.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url())
            .map_err(|e| ApiError::Config(format!("server.base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "server.base_url is not a base URL: {base_url}"
            )));
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn post_json<T: Serialize>(&self, segments: &[&str], body: &T) -> Result<StatusCode> {
        let url = self.endpoint(segments);
        tracing::debug!("POST {}", url.path());
        let response = self.client.post(url).json(body).send().await?;
        Ok(response.status())
    }
}

impl AccountApi for HttpApi {
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<RegisterStatus> {
        let body = RegisterBody {
            username,
            email,
            password,
        };
        let status = self.post_json(&["auth", "register"], &body).await?;
        tracing::info!("register answered {}", status.as_u16());
        Ok(RegisterStatus::from(status.as_u16()))
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginStatus> {
        let status = self
            .post_json(&["auth", "login"], &LoginBody { email, password })
            .await?;
        tracing::info!("login answered {}", status.as_u16());
        Ok(LoginStatus::from(status.as_u16()))
    }

    async fn verify_2fa(&self, email: &str, code: &str) -> Result<bool> {
        let status = self
            .post_json(&["auth", "2fa"], &TwoFactorBody { email, code })
            .await?;
        tracing::info!("2fa verification answered {}", status.as_u16());
        Ok(status.is_success())
    }

    async fn get_user_info(&self) -> Result<Option<UserInfo>> {
        let url = self.endpoint(&["auth", "me"]);
        tracing::debug!("GET {}", url.path());
        let response = self.client.get(url).send().await?;
        match response.status() {
            s if s.is_success() => Ok(Some(response.json::<UserInfo>().await?)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            s => Err(ApiError::Status(s.as_u16())),
        }
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", user_id, "profile"]);
        tracing::debug!("GET {}", url.path());
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json::<Profile>().await?)
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<bool> {
        let url = self.endpoint(&["users", "me", "settings"]);
        tracing::debug!("PUT {}", url.path());
        let status = self.client.put(url).json(update).send().await?.status();
        tracing::info!("settings update answered {}", status.as_u16());
        Ok(status.is_success())
    }

    async fn update_avatar(&self, png: &[u8]) -> Result<bool> {
        let url = self.endpoint(&["users", "me", "avatar"]);
        tracing::debug!("PUT {} ({} bytes)", url.path(), png.len());
        let status = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "image/png")
            .body(png.to_vec())
            .send()
            .await?
            .status();
        tracing::info!("avatar upload answered {}", status.as_u16());
        Ok(status.is_success())
    }

    async fn logout(&self) -> Result<()> {
        let url = self.endpoint(&["auth", "logout"]);
        tracing::debug!("POST {}", url.path());
        let status = self.client.post(url).send().await?.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

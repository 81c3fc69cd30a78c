//! Account flows: login, register, logout, profile, password, user
//! directory.
//!
//! The auth endpoints answer with loose field:value records (`token`,
//! `username`, `role`, `error`, `message` — any subset), so responses are
//! read as JSON values and picked apart leniently, the way the dashboard
//! always has.

use serde::Serialize;
use serde_json::Value;

use stockdeck_auth::{Credential, Profile, Role, UserAccount};
use stockdeck_core::{ClientError, ClientResult};

use crate::gateway::{expect_success, parse_json, Gateway};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
    role: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_key: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

/// Registration form state.
///
/// The admin key is only meaningful (and only sent) when registering as
/// Admin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    pub admin_key: String,
}

impl RegisterForm {
    pub fn validate(&self) -> ClientResult<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ClientError::validation("username and password are required"));
        }
        Ok(())
    }
}

/// Outcome of a successful registration.
///
/// `downgraded` is set when Admin was requested but the server granted
/// something else — the admin key was not accepted, and the caller must say
/// so rather than silently proceeding as User.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub credential: Credential,
    pub downgraded: bool,
}

/// POST `/auth/login/`.
pub async fn login(gateway: &Gateway, username: &str, password: &str) -> ClientResult<Credential> {
    let resp = gateway
        .post("/auth/login/", &LoginRequest { username, password })
        .await?;

    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let msg = server_message(&body).unwrap_or("invalid username or password");
        return Err(ClientError::api(status.as_u16(), msg));
    }

    credential_from_auth_body(&body, username)
}

/// POST `/auth/register/`.
pub async fn register(gateway: &Gateway, form: &RegisterForm) -> ClientResult<Registration> {
    form.validate()?;

    let admin_key = (form.role == Role::Admin).then_some(form.admin_key.as_str());
    let resp = gateway
        .post(
            "/auth/register/",
            &RegisterRequest {
                username: &form.username,
                password: &form.password,
                email: &form.email,
                role: form.role.as_str(),
                admin_key,
            },
        )
        .await?;

    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let msg = server_message(&body).unwrap_or("registration failed");
        return Err(ClientError::api(status.as_u16(), msg));
    }

    let credential = credential_from_auth_body(&body, &form.username)?;
    let downgraded = form.role == Role::Admin && credential.role() != Role::Admin;
    if downgraded {
        tracing::warn!("admin registration downgraded by server");
    }

    Ok(Registration {
        credential,
        downgraded,
    })
}

/// Best-effort POST `/auth/logout/`. The session is cleared locally no
/// matter what this returns, so failures are only logged.
pub async fn logout(gateway: &Gateway) {
    match gateway.post_empty("/auth/logout/").await {
        Ok(resp) if !resp.status().is_success() => {
            tracing::debug!(status = resp.status().as_u16(), "logout call rejected");
        }
        Ok(_) => {}
        Err(err) => tracing::debug!("logout call failed: {err}"),
    }
}

/// GET `/auth/profile/`.
pub async fn fetch_profile(gateway: &Gateway) -> ClientResult<Profile> {
    let resp = expect_success(gateway.get("/auth/profile/").await?).await?;
    parse_json(resp).await
}

/// PUT `/auth/profile/`. Returns the server's confirmation message.
pub async fn update_profile(gateway: &Gateway, profile: &Profile) -> ClientResult<String> {
    let resp = expect_success(gateway.put("/auth/profile/", profile).await?).await?;
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    Ok(message_or(&body, "Profile updated"))
}

/// POST `/auth/change-password/`. Returns the server's confirmation message.
pub async fn change_password(
    gateway: &Gateway,
    old_password: &str,
    new_password: &str,
) -> ClientResult<String> {
    let resp = gateway
        .post(
            "/auth/change-password/",
            &ChangePasswordRequest {
                old_password,
                new_password,
            },
        )
        .await?;

    let status = resp.status();
    if status.as_u16() == 401 {
        return Err(ClientError::SessionExpired);
    }

    let body: Value = resp.json().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let msg = server_message(&body).unwrap_or("failed to change password");
        return Err(ClientError::api(status.as_u16(), msg));
    }

    Ok(message_or(&body, "Password changed"))
}

/// GET `/users/` — Admin only; 403 surfaces as [`ClientError::Forbidden`].
pub async fn list_users(gateway: &Gateway) -> ClientResult<Vec<UserAccount>> {
    let resp = expect_success(gateway.get("/users/").await?).await?;
    parse_json(resp).await
}

/// Build the credential out of an auth response body.
///
/// An OK response without a token is a protocol violation; a missing role
/// degrades to User, a missing username falls back to what the user typed.
fn credential_from_auth_body(body: &Value, fallback_username: &str) -> ClientResult<Credential> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::parse("no token returned from server"))?;

    let username = body
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or(fallback_username);

    let role = body
        .get("role")
        .and_then(Value::as_str)
        .map(Role::parse_or_default)
        .unwrap_or_default();

    Ok(Credential::new(token, username, role))
}

fn server_message(body: &Value) -> Option<&str> {
    body.get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
}

fn message_or(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

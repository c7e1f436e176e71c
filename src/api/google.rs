//! Google OAuth2 credentials for the Sheets API.
//!
//! The access token is cached as `token.json` in the application data
//! directory, in the same shape Google's Python client library writes
//! (`token`, `refresh_token`, `token_uri`, `client_id`, `client_secret`,
//! `scopes`, `expiry`), so an existing token file can simply be copied over.
//!
//! ## Lifecycle
//!
//! 1. `sheetclock login` runs the installed-app consent flow once, using the
//!    client secrets from `credentials.json`, and caches the token.
//! 2. Every run calls [`Credentials::authorize`], which loads the cached token
//!    and refreshes it when it is about to expire.
//! 3. `sheetclock logout` deletes the cached token.

use super::SheetsError;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// OAuth2 scopes requested by sheetclock.
pub const SCOPES: &[&str] = &["https://www.googleapis.com/auth/spreadsheets"];

const TOKEN_FILE: &str = "token.json";
const CREDENTIALS_FILE: &str = "credentials.json";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Tokens this close to expiry are refreshed up front.
const EXPIRY_MARGIN_SECONDS: i64 = 60;
const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Cached OAuth2 token. Both `token` and `access_token` are accepted on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleToken {
    #[serde(alias = "access_token")]
    pub token: String,
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// RFC 3339 expiry time.
    #[serde(default)]
    pub expiry: Option<String>,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl GoogleToken {
    /// A token without a parseable expiry is treated as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiry.as_deref().map(DateTime::parse_from_rfc3339) {
            Some(Ok(expiry)) => expiry.with_timezone(&Utc) <= now + Duration::seconds(EXPIRY_MARGIN_SECONDS),
            _ => true,
        }
    }
}

/// Client secrets downloaded from Google Cloud for a Desktop App client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub installed: InstalledAppCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstalledAppCredentials {
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
}

fn expiry_after(expires_in: Option<u64>) -> String {
    let seconds = expires_in.unwrap_or(DEFAULT_EXPIRES_IN) as i64;
    (Utc::now() + Duration::seconds(seconds)).to_rfc3339()
}

fn storage_path(file_name: &str) -> Result<PathBuf, SheetsError> {
    DataStorage::new()
        .get_path(file_name)
        .map_err(|e| SheetsError::Storage(e.to_string()))
}

/// A valid access token, ready to authorize Sheets calls.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: GoogleToken,
}

impl Credentials {
    pub fn new(token: GoogleToken) -> Self {
        Self { token }
    }

    pub fn access_token(&self) -> &str {
        &self.token.token
    }

    pub fn token_path() -> Result<PathBuf, SheetsError> {
        storage_path(TOKEN_FILE)
    }

    pub fn load() -> Result<GoogleToken, SheetsError> {
        let path = Self::token_path()?;
        if !path.exists() {
            return Err(SheetsError::TokenNotFound(path));
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(token: &GoogleToken) -> Result<PathBuf, SheetsError> {
        let path = Self::token_path()?;
        fs::write(&path, serde_json::to_string_pretty(token)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(path)
    }

    /// Removes the cached token. Returns `false` if there was none.
    pub fn delete() -> Result<bool, SheetsError> {
        let path = Self::token_path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Loads the cached token, refreshing and re-saving it when expired.
    pub async fn authorize() -> Result<Self, SheetsError> {
        let token = Self::load()?;
        if !token.is_expired(Utc::now()) {
            return Ok(Self::new(token));
        }

        let refreshed = refresh_access_token(&Client::new(), &token).await?;
        Self::save(&refreshed)?;
        msg_debug!(Message::TokenRefreshed);
        Ok(Self::new(refreshed))
    }
}

/// Exchanges the refresh token for a new access token.
pub async fn refresh_access_token(client: &Client, token: &GoogleToken) -> Result<GoogleToken, SheetsError> {
    let refresh_token = token.refresh_token.as_deref().ok_or(SheetsError::AuthExpired)?;

    let mut form = vec![
        ("client_id", token.client_id.as_str()),
        ("refresh_token", refresh_token),
        ("grant_type", "refresh_token"),
    ];
    if let Some(secret) = token.client_secret.as_deref() {
        form.push(("client_secret", secret));
    }

    let res = client.post(&token.token_uri).form(&form).send().await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(SheetsError::RefreshFailed(format!("{}: {}", status.as_u16(), body)));
    }
    let response: TokenResponse = serde_json::from_str(&body)?;

    Ok(GoogleToken {
        token: response.access_token,
        refresh_token: response.refresh_token.or_else(|| token.refresh_token.clone()),
        expiry: Some(expiry_after(response.expires_in)),
        ..token.clone()
    })
}

/// Reads client secrets from `path`, or from `credentials.json` in the data directory.
pub fn load_client_credentials(path: Option<&Path>) -> Result<ClientCredentials, SheetsError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => storage_path(CREDENTIALS_FILE)?,
    };
    if !path.exists() {
        return Err(SheetsError::CredentialsNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| SheetsError::InvalidCredentials(format!("{}: {}", path.display(), e)))
}

/// Builds the consent page URL the user has to open.
pub fn consent_url(installed: &InstalledAppCredentials, redirect_uri: &str) -> Result<Url, SheetsError> {
    let scope = SCOPES.join(" ");
    Url::parse_with_params(
        &installed.auth_uri,
        &[
            ("client_id", installed.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| SheetsError::InvalidCredentials(e.to_string()))
}

/// Pulls the `code` query parameter out of the redirect's request line,
/// e.g. `GET /?code=4%2F0Ab&scope=... HTTP/1.1`.
pub fn auth_code_from_request(request: &str) -> Result<String, SheetsError> {
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .ok_or(SheetsError::FlowCancelled)?;
    let url = Url::parse(&format!("http://localhost{}", target)).map_err(|_| SheetsError::FlowCancelled)?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, code)| code.into_owned())
        .filter(|code| !code.is_empty())
        .ok_or(SheetsError::FlowCancelled)
}

/// Runs the installed-app consent flow and caches the resulting token.
///
/// Returns the path the token was saved to.
pub async fn run_consent_flow(credentials_path: Option<&Path>) -> Result<PathBuf, SheetsError> {
    let credentials = load_client_credentials(credentials_path)?;
    let installed = &credentials.installed;

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let redirect_uri = format!("http://localhost:{}", port);

    msg_print!(Message::OpenConsentUrl(consent_url(installed, &redirect_uri)?.to_string()));
    msg_print!(Message::WaitingForConsent(port));

    let (mut stream, _) = listener.accept().await?;
    let mut buffer = [0u8; 4096];
    let n = stream.read(&mut buffer).await?;
    let request = String::from_utf8_lossy(&buffer[..n]).to_string();

    let code = auth_code_from_request(&request);
    let page = match code {
        Ok(_) => "Authorization successful. You can close this tab.",
        Err(_) => "Authorization denied. You can close this tab.",
    };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
        page.len(),
        page
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.flush().await;
    let code = code?;

    let mut form = vec![
        ("code", code.as_str()),
        ("client_id", installed.client_id.as_str()),
        ("redirect_uri", redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
    ];
    if let Some(secret) = installed.client_secret.as_deref() {
        form.push(("client_secret", secret));
    }

    let res = Client::new().post(&installed.token_uri).form(&form).send().await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(SheetsError::RefreshFailed(format!("Token exchange failed: {}", body)));
    }
    let response: TokenResponse = serde_json::from_str(&body)?;

    let token = GoogleToken {
        token: response.access_token,
        refresh_token: response.refresh_token,
        token_uri: installed.token_uri.clone(),
        client_id: installed.client_id.clone(),
        client_secret: installed.client_secret.clone(),
        scopes: SCOPES.iter().map(|scope| scope.to_string()).collect(),
        expiry: Some(expiry_after(response.expires_in)),
    };

    Credentials::save(&token)
}

//! Azure AD sign-in for the admin APIs
//!
//! Two grants are supported: the resource-owner password grant when a
//! username/password pair is supplied, and the device-code flow when the
//! run is interactive. Both are issued once per resource audience.

use log::debug;
use serde::{Deserialize, Deserializer};
use std::time::{Duration, Instant};

use crate::config::auth;
use crate::error::{PpError, Result};

/// Username/password pair supplied on the command line
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize, Debug, Default)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl TokenErrorResponse {
    fn message(&self) -> String {
        self.error_description
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "token request failed".to_string())
    }
}

/// Device-code grant bootstrap response
///
/// The v1 endpoint serializes `interval` and `expires_in` as strings.
#[derive(Deserialize, Debug)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_url: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    interval: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    expires_in: Option<u64>,
}

/// Accept a u64 serialized either as a number or as a string
fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }))
}

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_CODE_LIFETIME_SECS: u64 = 900;

/// Azure AD token acquisition
pub struct Authenticator {
    client: reqwest::Client,
    /// OAuth endpoint base, `.../common/oauth2` (overridable for tests)
    login_url: String,
}

impl Authenticator {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            login_url: format!("https://{}/common/oauth2", auth::LOGIN_HOST),
        }
    }

    /// Create an authenticator against a custom login URL (for mock servers)
    #[cfg(test)]
    pub fn with_login_url(login_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            login_url: login_url.to_string(),
        }
    }

    /// Obtain an access token for the given resource audience
    ///
    /// With credentials this is non-interactive; without, the device-code
    /// message is printed and the call blocks until the user completes
    /// sign-in in a browser (or the code expires).
    pub async fn sign_in(
        &self,
        credentials: Option<&Credentials>,
        resource: &str,
    ) -> Result<String> {
        match credentials {
            Some(creds) => self.password_grant(creds, resource).await,
            None => self.device_code_flow(resource).await,
        }
    }

    async fn password_grant(&self, creds: &Credentials, resource: &str) -> Result<String> {
        let url = format!("{}/token", self.login_url);
        debug!("Requesting token for {} via password grant", resource);

        let params = [
            ("grant_type", "password"),
            ("client_id", auth::CLIENT_ID),
            ("resource", resource),
            ("username", &creds.username),
            ("password", &creds.password),
        ];
        let response = self.client.post(&url).form(&params).send().await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let err: TokenErrorResponse = response.json().await.unwrap_or_default();
            return Err(PpError::Auth {
                status,
                message: err.message(),
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn device_code_flow(&self, resource: &str) -> Result<String> {
        let url = format!("{}/devicecode", self.login_url);
        debug!("Requesting device code for {}", resource);

        let params = [("client_id", auth::CLIENT_ID), ("resource", resource)];
        let response = self.client.post(&url).form(&params).send().await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let err: TokenErrorResponse = response.json().await.unwrap_or_default();
            return Err(PpError::Auth {
                status,
                message: err.message(),
            });
        }

        let device: DeviceCodeResponse = response.json().await?;
        match &device.message {
            Some(message) => println!("{}", message),
            None => println!(
                "To sign in, open {} and enter the code {}",
                device.verification_url, device.user_code
            ),
        }

        let mut interval = device.interval.unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        let lifetime = device.expires_in.unwrap_or(DEFAULT_CODE_LIFETIME_SECS);
        let deadline = Instant::now() + Duration::from_secs(lifetime);

        loop {
            if Instant::now() >= deadline {
                return Err(PpError::Auth {
                    status: 400,
                    message: "device code expired before sign-in completed".to_string(),
                });
            }
            tokio::time::sleep(Duration::from_secs(interval)).await;

            let token_url = format!("{}/token", self.login_url);
            let params = [
                ("grant_type", "device_code"),
                ("client_id", auth::CLIENT_ID),
                ("resource", resource),
                ("code", &device.device_code),
            ];
            let response = self.client.post(&token_url).form(&params).send().await?;

            let status = response.status().as_u16();
            if (200..300).contains(&status) {
                let token: TokenResponse = response.json().await?;
                return Ok(token.access_token);
            }

            let err: TokenErrorResponse = response.json().await.unwrap_or_default();
            match err.error.as_deref() {
                Some("authorization_pending") => {
                    debug!("Sign-in still pending, polling again in {}s", interval);
                }
                Some("slow_down") => {
                    interval += 5;
                }
                _ => {
                    return Err(PpError::Auth {
                        status,
                        message: err.message(),
                    });
                }
            }
        }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_password_grant_success() {
        let mock_server = MockServer::start().await;
        let authenticator = Authenticator::with_login_url(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=password"))
            .and(body_string_contains("username=admin%40contoso.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "access_token": "primary-token-123"
            })))
            .mount(&mock_server)
            .await;

        let creds = Credentials {
            username: "admin@contoso.com".to_string(),
            password: "secret".to_string(),
        };
        let token = authenticator
            .sign_in(Some(&creds), "https://service.powerapps.com/")
            .await
            .unwrap();

        assert_eq!(token, "primary-token-123");
    }

    #[tokio::test]
    async fn test_password_grant_bad_credentials() {
        let mock_server = MockServer::start().await;
        let authenticator = Authenticator::with_login_url(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "AADSTS50126: Error validating credentials"
            })))
            .mount(&mock_server)
            .await;

        let creds = Credentials {
            username: "admin@contoso.com".to_string(),
            password: "wrong".to_string(),
        };
        let result = authenticator
            .sign_in(Some(&creds), "https://service.powerapps.com/")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Auth { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("AADSTS50126"));
            }
            _ => panic!("Expected PpError::Auth"),
        }
    }

    #[tokio::test]
    async fn test_device_code_flow_immediate_success() {
        let mock_server = MockServer::start().await;
        let authenticator = Authenticator::with_login_url(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/devicecode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "device_code": "dev-code-1",
                "user_code": "ABCD1234",
                "verification_url": "https://microsoft.com/devicelogin",
                "interval": "0",
                "expires_in": "900",
                "message": "Enter ABCD1234 at https://microsoft.com/devicelogin"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=device_code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "device-token-456"
            })))
            .mount(&mock_server)
            .await;

        let token = authenticator
            .sign_in(None, "https://service.powerapps.com/")
            .await
            .unwrap();
        assert_eq!(token, "device-token-456");
    }

    #[tokio::test]
    async fn test_device_code_flow_pending_then_success() {
        let mock_server = MockServer::start().await;
        let authenticator = Authenticator::with_login_url(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/devicecode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "device_code": "dev-code-2",
                "user_code": "WXYZ9876",
                "verification_url": "https://microsoft.com/devicelogin",
                "interval": 0,
                "expires_in": 900
            })))
            .mount(&mock_server)
            .await;

        // First poll: user has not finished signing in yet
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "authorization_pending"
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "device-token-789"
            })))
            .mount(&mock_server)
            .await;

        let token = authenticator
            .sign_in(None, "https://service.flow.microsoft.com/")
            .await
            .unwrap();
        assert_eq!(token, "device-token-789");
    }

    #[tokio::test]
    async fn test_device_code_flow_denied() {
        let mock_server = MockServer::start().await;
        let authenticator = Authenticator::with_login_url(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/devicecode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "device_code": "dev-code-3",
                "user_code": "DENY0000",
                "verification_url": "https://microsoft.com/devicelogin",
                "interval": 0,
                "expires_in": 900
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "authorization_declined",
                "error_description": "The user denied the request"
            })))
            .mount(&mock_server)
            .await;

        let result = authenticator
            .sign_in(None, "https://service.powerapps.com/")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Auth { message, .. } => assert!(message.contains("denied")),
            _ => panic!("Expected PpError::Auth"),
        }
    }

    #[test]
    fn test_device_code_response_string_numbers() {
        let json = r#"{
            "device_code": "d",
            "user_code": "u",
            "verification_url": "https://example.com",
            "interval": "5",
            "expires_in": "900"
        }"#;
        let resp: DeviceCodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.interval, Some(5));
        assert_eq!(resp.expires_in, Some(900));
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_token_error_message_fallbacks() {
        let err = TokenErrorResponse {
            error: Some("invalid_grant".to_string()),
            error_description: None,
        };
        assert_eq!(err.message(), "invalid_grant");

        let err = TokenErrorResponse::default();
        assert_eq!(err.message(), "token request failed");
    }
}

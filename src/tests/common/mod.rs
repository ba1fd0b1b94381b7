// tests/common/mod.rs
pub use serde_json::json;

use httpmock::Method::POST;
use httpmock::{Mock, MockServer};

use crate::auth::Credentials;
use crate::config::settings::Settings;
use crate::delivery::WnsClient;

pub const AUTH_PATH: &str = "/accesstoken.srf";
pub const CHANNEL_PATH: &str = "/channel/device-0001";

/// Settings pointing the login endpoint at the mock server.
pub fn settings_for(server: &MockServer) -> Settings {
    Settings {
        auth_url: server.url(AUTH_PATH),
        timeout_ms: 2_000,
        ..Settings::default()
    }
}

pub fn client_for(server: &MockServer) -> WnsClient {
    WnsClient::new(Credentials::new("A", "S"), &settings_for(server)).expect("client builds")
}

pub fn channel_uri(server: &MockServer) -> String {
    server.url(CHANNEL_PATH)
}

/// Login endpoint answering every well-formed client-credentials request.
pub async fn auth_mock<'a>(server: &'a MockServer, token: &str, expires_in: i64) -> Mock<'a> {
    let body = json!({
        "token_type": "Bearer",
        "access_token": token,
        "expires_in": expires_in,
    });
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(AUTH_PATH)
                .body_includes("grant_type=client_credentials")
                .body_includes("client_id=A")
                .body_includes("client_secret=S")
                .body_includes("scope=notify.windows.com");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

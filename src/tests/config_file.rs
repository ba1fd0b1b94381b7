#[cfg(test)]
mod tests {
    use std::io::Write;

    use httpmock::MockServer;

    use crate::config::loader::file_to_config;
    use crate::config::settings::{ClientConfig, CredentialsConfig, Settings};
    use crate::delivery::WnsClient;
    use crate::errors::{ErrorKind, WnsError};
    use crate::tests::common::{auth_mock, AUTH_PATH};

    #[tokio::test]
    async fn client_from_yaml_file_authenticates() {
        let server = MockServer::start_async().await;
        let auth = auth_mock(&server, "T9", 3600).await;

        std::env::set_var("WNS_PUSH_TEST_CLIENT_SECRET", "S");
        let yaml = format!(
            r#"
credentials:
  app_id: A
  secret: ${{WNS_PUSH_TEST_CLIENT_SECRET}}
settings:
  auth_url: "{}"
  timeout_ms: 2000
  logging:
    level: debug
    format: json
"#,
            server.url(AUTH_PATH)
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let cfg = file_to_config(file.path()).await.unwrap();
        assert_eq!(cfg.credentials.secret, "S");
        assert_eq!(cfg.settings.timeout_ms, 2000);

        let client = WnsClient::from_config(&cfg).unwrap();
        assert!(client.authenticate().await.unwrap());
        assert_eq!(client.session().await.token(), "T9");
        auth.assert_async().await;
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = file_to_config(std::path::Path::new("/nonexistent/wns.yaml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn invalid_config_is_refused_before_building_a_client() {
        let cfg = ClientConfig {
            credentials: CredentialsConfig {
                app_id: "A".into(),
                secret: " ".into(),
            },
            settings: Settings::default(),
        };

        let err = WnsClient::from_config(&cfg).unwrap_err();
        assert!(matches!(&err, WnsError::Config(msg) if msg.contains("credentials.secret")));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

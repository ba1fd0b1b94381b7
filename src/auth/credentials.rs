use std::fmt;

use crate::config::settings::CredentialsConfig;

/// Package SID and client secret issued for the application.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    secret: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: secret.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl From<&CredentialsConfig> for Credentials {
    fn from(cfg: &CredentialsConfig) -> Self {
        Self::new(cfg.app_id.clone(), cfg.secret.clone())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("secret", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let creds = Credentials::new("A", "top-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("\"A\""));
        assert!(!printed.contains("top-secret"));
    }
}

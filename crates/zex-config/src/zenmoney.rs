//! ZenMoney API configuration.

use serde::{Deserialize, Serialize};

/// Default API base URL.
fn default_base_url() -> String {
    "https://api.zenmoney.ru".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZenMoneyConfig {
    /// Personal access token. Get it from <https://zerro.app/token>.
    #[serde(default)]
    pub token: String,

    /// API base URL. Overridable for tests and self-hosted proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ZenMoneyConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl ZenMoneyConfig {
    /// Check that the section has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}

//! Settings forms: sensor-board Wi-Fi and the control-board server URL.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sensor_board::SensorBoardStatus;

/// Shown after a successful Wi-Fi save when the server sent no message.
pub const WIFI_SAVED_FALLBACK: &str = "WiFi settings saved successfully!";

/// Contents of the Wi-Fi modal as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiForm {
    pub ssid: String,
    pub password: String,
    pub server_url: String,
}

impl WifiForm {
    /// Pre-fill the form from the board status. The password is never
    /// pre-filled.
    #[must_use]
    pub fn from_status(status: &SensorBoardStatus) -> Self {
        Self {
            ssid: status.wifi_ssid.clone().unwrap_or_default(),
            password: String::new(),
            server_url: status.server_url.clone().unwrap_or_default(),
        }
    }

    /// Trim and check the form, producing the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySsid`] or
    /// [`ValidationError::EmptyServerUrl`] when either is blank.
    pub fn validate(&self) -> Result<WifiSettings, ValidationError> {
        let ssid = self.ssid.trim();
        if ssid.is_empty() {
            return Err(ValidationError::EmptySsid);
        }
        let server_url = self.server_url.trim();
        if server_url.is_empty() {
            return Err(ValidationError::EmptyServerUrl);
        }
        Ok(WifiSettings {
            ssid: ssid.to_string(),
            password: self.password.clone(),
            server_url: server_url.to_string(),
        })
    }
}

/// Body of `PUT /sensor-board/wifi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSettings {
    pub ssid: String,
    pub password: String,
    pub server_url: String,
}

/// Body of `PUT /control-board/server-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUrlUpdate {
    pub server_url: String,
}

impl ServerUrlUpdate {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyControlBoardUrl`] when `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let server_url = raw.trim();
        if server_url.is_empty() {
            return Err(ValidationError::EmptyControlBoardUrl);
        }
        Ok(Self {
            server_url: server_url.to_string(),
        })
    }

    #[must_use]
    pub fn saved_text(&self) -> String {
        format!("URL saved successfully: {}", self.server_url)
    }
}

/// Whether the control board has a server URL configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerUrlStatus {
    Configured(String),
    NotConfigured,
}

impl ServerUrlStatus {
    #[must_use]
    pub fn from_url(url: Option<String>) -> Self {
        match url.map(|u| u.trim().to_string()) {
            Some(url) if !url.is_empty() => Self::Configured(url),
            _ => Self::NotConfigured,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Configured(url) => Some(url),
            Self::NotConfigured => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Configured(url) => format!("Currently configured: {url}"),
            Self::NotConfigured => "Not configured".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_never_prefill_password() {
        let status = SensorBoardStatus {
            wifi_ssid: Some("home-net".to_string()),
            server_url: Some("http://10.0.0.2:5000".to_string()),
            ..SensorBoardStatus::default()
        };
        let form = WifiForm::from_status(&status);
        assert_eq!(form.ssid, "home-net");
        assert_eq!(form.server_url, "http://10.0.0.2:5000");
        assert!(form.password.is_empty());
    }

    #[test]
    fn should_trim_wifi_fields() {
        let form = WifiForm {
            ssid: "  home-net ".to_string(),
            password: " secret ".to_string(),
            server_url: " http://hub ".to_string(),
        };
        let settings = form.validate().unwrap();
        assert_eq!(settings.ssid, "home-net");
        assert_eq!(settings.server_url, "http://hub");
        assert_eq!(settings.password, " secret ");
    }

    #[test]
    fn should_reject_blank_ssid() {
        let form = WifiForm {
            ssid: "   ".to_string(),
            server_url: "http://hub".to_string(),
            ..WifiForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptySsid));
    }

    #[test]
    fn should_reject_blank_server_url() {
        let form = WifiForm {
            ssid: "home-net".to_string(),
            ..WifiForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyServerUrl));
    }

    #[test]
    fn should_parse_control_board_url() {
        let update = ServerUrlUpdate::parse(" http://10.0.0.3:5000 ").unwrap();
        assert_eq!(update.server_url, "http://10.0.0.3:5000");
        assert_eq!(update.saved_text(), "URL saved successfully: http://10.0.0.3:5000");
        assert_eq!(
            ServerUrlUpdate::parse(""),
            Err(ValidationError::EmptyControlBoardUrl)
        );
    }

    #[test]
    fn should_describe_server_url_status() {
        let configured = ServerUrlStatus::from_url(Some("http://hub".to_string()));
        assert_eq!(configured.text(), "Currently configured: http://hub");
        assert_eq!(configured.url(), Some("http://hub"));
        assert_eq!(
            ServerUrlStatus::from_url(Some(String::new())),
            ServerUrlStatus::NotConfigured
        );
        assert_eq!(ServerUrlStatus::from_url(None).text(), "Not configured");
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::profile::Profile;

/// Build-time default for the backend origin.
/// Override at build time: API_SERVER_URL=https://example.com cargo build
const BUILD_API_SERVER_URL: Option<&str> = option_env!("API_SERVER_URL");

/// Deployment placeholders carry this prefix so an unreplaced value is
/// caught by `validate` instead of reaching the identity provider.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Identity-provider settings for the login/redirect flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Config {
    /// Tenant domain prefix, e.g. "iazer.us" for iazer.us.auth0.com.
    pub domain: String,
    /// Identifier of the API the provider issues tokens for.
    pub audience: String,
    /// Public identifier of the registered application.
    pub client_id: String,
    /// Must match a callback URL registered with the provider, or the
    /// redirect fails on the provider side.
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Auth0Config {
    /// Build the provider's `/authorize` link for the implicit login flow.
    pub fn authorize_url(&self) -> Result<Url, ConfigError> {
        let base = format!("https://{}.auth0.com/authorize", self.domain);
        let mut url = Url::parse(&base).map_err(|source| ConfigError::InvalidUrl {
            field: "auth0.domain",
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }
}

/// Static environment descriptor for a frontend client.
///
/// One variant is active per process. Construct it once at startup, validate
/// it, and pass it into the HTTP and auth clients that need it; nothing here
/// is a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    pub production: bool,
    /// Base URL (scheme + host + port) of the backend API.
    pub api_server_url: String,
    pub auth0: Auth0Config,
}

impl EnvironmentConfig {
    /// Local development variant: backend on the loopback interface, the
    /// app served by the dev tooling on port 8100.
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".to_string(),
            auth0: Auth0Config {
                domain: "iazer.us".to_string(),
                audience: "coffeeShop".to_string(),
                client_id: "LBUvYGCvJIDbzQw98EIHc1v7CxIs7cfr".to_string(),
                callback_url: "http://localhost:8100".to_string(),
            },
        }
    }

    /// Production variant. Ships with `YOUR_…` placeholders that every
    /// deployment must replace (via `load` overrides or a build-time
    /// `API_SERVER_URL`); `validate` rejects any that remain.
    pub fn production() -> Self {
        Self {
            production: true,
            api_server_url: BUILD_API_SERVER_URL
                .unwrap_or("https://YOUR_API_HOST")
                .to_string(),
            auth0: Auth0Config {
                domain: "YOUR_AUTH0_TENANT".to_string(),
                audience: "YOUR_API_AUDIENCE".to_string(),
                client_id: "YOUR_AUTH0_CLIENT_ID".to_string(),
                callback_url: "https://YOUR_APP_ORIGIN".to_string(),
            },
        }
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self::development(),
            Profile::Production => Self::production(),
        }
    }

    /// Load the variant for `profile`, apply per-field overrides from the
    /// process environment, and validate the result.
    ///
    /// Recognized variables: `API_SERVER_URL`, `AUTH0_DOMAIN`,
    /// `AUTH0_AUDIENCE`, `AUTH0_CLIENT_ID`, `AUTH0_CALLBACK_URL`.
    pub fn load(profile: Profile) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let mut config = Self::for_profile(profile);
        override_from_env("API_SERVER_URL", &mut config.api_server_url);
        override_from_env("AUTH0_DOMAIN", &mut config.auth0.domain);
        override_from_env("AUTH0_AUDIENCE", &mut config.auth0.audience);
        override_from_env("AUTH0_CLIENT_ID", &mut config.auth0.client_id);
        override_from_env("AUTH0_CALLBACK_URL", &mut config.auth0.callback_url);
        config.validate()?;
        tracing::info!(
            profile = profile.as_str(),
            api_server_url = %config.api_server_url,
            "environment configuration loaded"
        );
        Ok(config)
    }

    /// Check the invariants every consumer relies on: no empty fields, no
    /// unreplaced placeholders, and well-formed http(s) URLs where a URL is
    /// expected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_field("apiServerUrl", &self.api_server_url)?;
        check_field("auth0.domain", &self.auth0.domain)?;
        check_field("auth0.audience", &self.auth0.audience)?;
        check_field("auth0.clientId", &self.auth0.client_id)?;
        check_field("auth0.callbackURL", &self.auth0.callback_url)?;
        check_http_url("apiServerUrl", &self.api_server_url)?;
        check_http_url("auth0.callbackURL", &self.auth0.callback_url)?;
        Ok(())
    }

    /// Join a request path onto the API origin.
    pub fn api_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn override_from_env(var: &'static str, field: &mut String) {
    if let Ok(value) = std::env::var(var) {
        if !value.is_empty() {
            tracing::debug!(var, "environment override applied");
            *field = value;
        }
    }
}

fn check_field(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    if value.contains(PLACEHOLDER_PREFIX) {
        return Err(ConfigError::Placeholder {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Build-time fallback for the active profile.
/// Override at build time: APP_ENV=production cargo build
const BUILD_PROFILE: Option<&str> = option_env!("APP_ENV");

/// Named environment profile. Exactly one is active per running process;
/// switching requires a new build or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    pub fn is_production(self) -> bool {
        matches!(self, Profile::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Resolve the active profile for this process.
    ///
    /// Precedence: `APP_ENV` from the process environment (a local `.env`
    /// file is honored), then the `APP_ENV` baked in at compile time, then
    /// `Development`. An unrecognized name is an error rather than a silent
    /// fallback, so a typo in a deployment script cannot ship a dev config.
    pub fn detect() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        match std::env::var("APP_ENV") {
            Ok(name) => name.parse(),
            Err(_) => match BUILD_PROFILE {
                Some(name) => name.parse(),
                None => Ok(Profile::Development),
            },
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_short_and_long_names() {
        assert_eq!("development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("production".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!("PROD".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!(" prod ".parse::<Profile>().unwrap(), Profile::Production);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
        assert!(!Profile::default().is_production());
    }
}

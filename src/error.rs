use thiserror::Error;

/// Validation and profile-selection failures.
///
/// The descriptor itself cannot fail to construct; these surface when a
/// variant is checked at startup or when a profile name cannot be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("configuration field `{field}` is not a valid absolute URL")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("configuration field `{field}` has unsupported scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("configuration field `{field}` still holds the deployment placeholder `{value}`")]
    Placeholder { field: &'static str, value: String },

    #[error("unknown environment profile `{0}` (expected \"development\" or \"production\")")]
    UnknownProfile(String),
}

//! Email relay configuration resolved from build-time environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PUBLIC_KEY: &str = "xzS9ZOIj7mFOoR-gz";
pub const DEFAULT_SERVICE_ID: &str = "service_439axng";
pub const DEFAULT_TEMPLATE_ID: &str = "template_8slsqor";
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const PUBLIC_KEY_VAR: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";
const SERVICE_ID_VAR: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
const ENDPOINT_VAR: &str = "PORTFOLIO_EMAILJS_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("relay setting {var} is blank")]
    Blank { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            public_key: DEFAULT_PUBLIC_KEY.to_owned(),
            service_id: DEFAULT_SERVICE_ID.to_owned(),
            template_id: DEFAULT_TEMPLATE_ID.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

impl RelayConfig {
    /// Build relay config from variables captured at compile time.
    ///
    /// Optional (defaults are the identifiers the site ships with):
    /// - `PORTFOLIO_EMAILJS_PUBLIC_KEY`
    /// - `PORTFOLIO_EMAILJS_SERVICE_ID`
    /// - `PORTFOLIO_EMAILJS_TEMPLATE_ID`
    /// - `PORTFOLIO_EMAILJS_ENDPOINT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| compile_time_var(var).map(str::to_owned))
    }

    /// Build relay config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Blank` when a variable is set but empty after
    /// trimming.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Ok(default.to_owned()),
                Some(raw) if raw.trim().is_empty() => Err(ConfigError::Blank { var }),
                Some(raw) => Ok(raw.trim().to_owned()),
            }
        };

        Ok(Self {
            public_key: read(PUBLIC_KEY_VAR, DEFAULT_PUBLIC_KEY)?,
            service_id: read(SERVICE_ID_VAR, DEFAULT_SERVICE_ID)?,
            template_id: read(TEMPLATE_ID_VAR, DEFAULT_TEMPLATE_ID)?,
            endpoint: read(ENDPOINT_VAR, DEFAULT_ENDPOINT)?.trim_end_matches('/').to_owned(),
        })
    }
}

fn compile_time_var(var: &str) -> Option<&'static str> {
    match var {
        PUBLIC_KEY_VAR => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        SERVICE_ID_VAR => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
        TEMPLATE_ID_VAR => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        ENDPOINT_VAR => option_env!("PORTFOLIO_EMAILJS_ENDPOINT"),
        _ => None,
    }
}

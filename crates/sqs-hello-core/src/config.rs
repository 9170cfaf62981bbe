//! Environment-driven configuration.
//!
//! Read once at startup and passed by reference to [`crate::SqsQueue::connect`].
//! Nothing else in the crate looks at the process environment.

use std::fmt;

pub const REGION_VAR: &str = "AWS_REGION";
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const QUEUE_URL_VAR: &str = "SQS_QUEUE_URL";

/// Region used when `AWS_REGION` is unset or empty.
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Region, static credentials and target queue for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub queue_url: String,
    /// Overrides the SQS endpoint, e.g. `http://localhost:4566` for LocalStack.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariables`] naming every required
    /// variable that is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value. Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let region = get(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let access_key_id = get(ACCESS_KEY_ID_VAR);
        let secret_access_key = get(SECRET_ACCESS_KEY_VAR);
        let queue_url = get(QUEUE_URL_VAR);

        match (access_key_id, secret_access_key, queue_url) {
            (Some(access_key_id), Some(secret_access_key), Some(queue_url)) => Ok(Self {
                region,
                access_key_id,
                secret_access_key,
                queue_url,
                endpoint_url: None,
            }),
            (access_key_id, secret_access_key, queue_url) => {
                let missing = [
                    (ACCESS_KEY_ID_VAR, access_key_id.is_none()),
                    (SECRET_ACCESS_KEY_VAR, secret_access_key.is_none()),
                    (QUEUE_URL_VAR, queue_url.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                Err(ConfigError::MissingVariables(missing))
            }
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &"** redacted **")
            .field("secret_access_key", &"** redacted **")
            .field("queue_url", &self.queue_url)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

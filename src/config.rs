use crate::{Error, Result};

/// Application-wide configuration, owned by the [`AppContext`](crate::AppContext).
///
/// Controls mailbox sizing and the active locale. Use the builder methods to
/// customize, or use [`Default`] for sensible defaults.
///
/// # Examples
///
/// ```rust
/// use gosling::Config;
///
/// let config = Config::default()
///     .with_mailbox_capacity(256)       // more room for bursts from worker threads
///     .with_max_signals_per_drain(16)   // keep each UI frame short
///     .with_locale("de");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of envelopes a mailbox can hold before posting fails (or waits).
    /// Default: 128
    pub mailbox_capacity: usize,

    /// Maximum number of envelopes a single [`Mailbox::drain`](crate::Mailbox::drain)
    /// call dispatches, so one burst can't stall the owning thread.
    /// Default: 64
    pub max_signals_per_drain: usize,

    /// Language tag used to pick the string table.
    /// Default: "en"
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mailbox_capacity: 128,
            max_signals_per_drain: 64,
            locale: "en".to_string(),
        }
    }
}

impl Config {
    /// Set the mailbox channel capacity.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    /// Set how many envelopes one drain call may dispatch.
    pub fn with_max_signals_per_drain(mut self, limit: usize) -> Self {
        self.max_signals_per_drain = limit;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Check the values before handing the config to a context.
    pub fn validate(&self) -> Result<()> {
        if self.mailbox_capacity == 0 {
            return Err(Error::InvalidConfig(
                "mailbox_capacity must be greater than zero".into(),
            ));
        }
        if self.max_signals_per_drain == 0 {
            return Err(Error::InvalidConfig(
                "max_signals_per_drain must be greater than zero".into(),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(Error::InvalidConfig("locale must not be blank".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

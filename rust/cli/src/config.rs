use ante_engine::blinds::MAX_ANTE;
use ante_engine::round::{MAX_DISCARDS, MAX_HANDS, RoundRules};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Ante level played by `ante play`
    pub level: u8,
    pub seed: Option<u64>,
    pub hands: u8,
    pub discards: u8,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub level: ValueSource,
    pub seed: ValueSource,
    pub hands: ValueSource,
    pub discards: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            level: ValueSource::Default,
            seed: ValueSource::Default,
            hands: ValueSource::Default,
            discards: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 1,
            seed: None,
            hands: MAX_HANDS,
            discards: MAX_DISCARDS,
        }
    }
}

impl Config {
    pub fn rules(&self) -> RoundRules {
        RoundRules {
            hands: self.hands,
            discards: self.discards,
            ..RoundRules::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration against `env`, a lookup standing in for the
/// process environment.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env("ANTE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.level {
            cfg.level = v;
            sources.level = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.discards {
            cfg.discards = v;
            sources.discards = ValueSource::File;
        }
    }

    if let Some(seed) = env("ANTE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(level) = env("ANTE_LEVEL")
        && !level.is_empty()
    {
        cfg.level = level
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid level".into()))?;
        sources.level = ValueSource::Env;
    }
    if let Some(hands) = env("ANTE_HANDS")
        && !hands.is_empty()
    {
        cfg.hands = hands
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hands".into()))?;
        sources.hands = ValueSource::Env;
    }
    if let Some(discards) = env("ANTE_DISCARDS")
        && !discards.is_empty()
    {
        cfg.discards = discards
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid discards".into()))?;
        sources.discards = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    level: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hands: Option<u8>,
    #[serde(default)]
    discards: Option<u8>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.level > MAX_ANTE {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: level must be <={}",
            MAX_ANTE
        )));
    }
    if cfg.hands == 0 || cfg.hands > MAX_HANDS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: hands must be 1..={}",
            MAX_HANDS
        )));
    }
    if cfg.discards > MAX_DISCARDS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: discards must be <={}",
            MAX_DISCARDS
        )));
    }
    Ok(())
}

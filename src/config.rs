use crate::error::{FieldbookError, Result};
use crate::logic::proximity::ProximityPolicy;
use crate::logic::zone::{zone_number, ZoneTuning};
use dialoguer::Input;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub grower: GrowerConfig,
    #[serde(default)]
    pub zone_adjustment: ZoneTuning,
    #[serde(default)]
    pub harvest_policy: ProximityPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GrowerConfig {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_zone")]
    pub usda_zone: Option<String>,
}

/// Accepts `usda_zone: 7` as well as `usda_zone: 7a`.
fn deserialize_zone<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ZoneValue {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<ZoneValue>::deserialize(deserializer)? {
        Some(ZoneValue::Number(n)) => Some(n.to_string()),
        Some(ZoneValue::Text(s)) => Some(s),
        None => None,
    })
}

impl Default for GrowerConfig {
    fn default() -> Self {
        Self {
            name: "Main Farm".into(),
            usda_zone: None,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FieldbookError::Config(format!(
                "Config file not found at {:?}. Run `fieldbook init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FieldbookError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&Self::substitute_env_vars(&config_str))?;
        tracing::info!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the config if one exists, otherwise falls back to defaults.
    ///
    /// An explicit path that does not exist is still an error.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::warn!("No config file found, using default harvest tuning");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| FieldbookError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let policy = &self.harvest_policy;
        if policy.fair_days < policy.good_days {
            return Err(FieldbookError::Config(format!(
                "harvest_policy.fair_days ({}) must be at least good_days ({})",
                policy.fair_days, policy.good_days
            )));
        }

        if let Some(zone) = self.grower.usda_zone.as_deref() {
            if zone_number(zone).is_none() {
                return Err(FieldbookError::Config(format!(
                    "grower.usda_zone '{}' is not a hardiness zone (1-13)",
                    zone
                )));
            }
        }

        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("fieldbook").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/fieldbook/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FieldbookError::Config("Cannot determine config directory".into()))?
            .join("fieldbook");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the config and the path it was written to.
    pub fn setup_interactive(config_override: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up Fieldbook!");
        println!();

        let defaults = Config::default();

        println!("Grower");
        let name: String = Input::new()
            .with_prompt("  Farm name")
            .default(defaults.grower.name.clone())
            .interact_text()
            .map_err(input_error)?;

        let usda_zone: String = Input::new()
            .with_prompt("  USDA hardiness zone (blank to skip)")
            .default(String::new())
            .allow_empty(true)
            .validate_with(|z: &String| -> std::result::Result<(), String> {
                if z.is_empty() || zone_number(z).is_some() {
                    Ok(())
                } else {
                    Err("expected a zone such as 6b or 7".into())
                }
            })
            .interact_text()
            .map_err(input_error)?;

        println!();

        println!("Zone adjustment");
        let days_per_zone: u32 = Input::new()
            .with_prompt("  Days per zone step")
            .default(defaults.zone_adjustment.days_per_zone)
            .interact_text()
            .map_err(input_error)?;

        let max_offset_days: u32 = Input::new()
            .with_prompt("  Maximum adjustment (days)")
            .default(defaults.zone_adjustment.max_offset_days)
            .interact_text()
            .map_err(input_error)?;

        println!();

        let config = Config {
            grower: GrowerConfig {
                name,
                usda_zone: (!usda_zone.is_empty()).then_some(usda_zone),
            },
            zone_adjustment: ZoneTuning {
                days_per_zone,
                max_offset_days,
            },
            harvest_policy: defaults.harvest_policy,
        };
        config.validate()?;

        let config_path = match config_override {
            Some(p) => p,
            None => Self::default_config_path()?,
        };
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let content = format!(
            "# Fieldbook Configuration\n# Generated by `fieldbook init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex_lite::Captures| {
                std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned()
    }
}

fn input_error(e: dialoguer::Error) -> FieldbookError {
    FieldbookError::Config(format!("Input error: {}", e))
}

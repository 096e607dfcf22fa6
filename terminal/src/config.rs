use std::env;

use sweeper_common::models::GameParams;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub params: GameParams,
    pub countdown: bool,
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameParams::default();
        let number = |key: &str, default: usize| -> usize {
            match lookup(key) {
                Some(value) => value.trim().parse().unwrap_or_else(|_| {
                    warn!("Ignoring invalid {}={:?}, using {}", key, value, default);
                    default
                }),
                None => default,
            }
        };

        let params = GameParams {
            width: number("SWEEPER_WIDTH", defaults.width),
            height: number("SWEEPER_HEIGHT", defaults.height),
            bombs: number("SWEEPER_BOMBS", defaults.bombs),
        };

        let countdown = lookup("SWEEPER_COUNTDOWN")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(false);

        let seed = lookup("SWEEPER_SEED").and_then(|value| value.trim().parse().ok());

        let output = match lookup("SWEEPER_OUTPUT").as_deref().map(str::trim) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            params,
            countdown,
            seed,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_beginner_board() {
        let config = config(&[]);
        assert_eq!(config.params, GameParams::default());
        assert!(!config.countdown);
        assert_eq!(config.seed, None);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn reads_every_setting() {
        let config = config(&[
            ("SWEEPER_WIDTH", "16"),
            ("SWEEPER_HEIGHT", " 12 "),
            ("SWEEPER_BOMBS", "30"),
            ("SWEEPER_COUNTDOWN", "on"),
            ("SWEEPER_SEED", "1234"),
            ("SWEEPER_OUTPUT", "json"),
        ]);
        assert_eq!(
            config.params,
            GameParams {
                width: 16,
                height: 12,
                bombs: 30
            }
        );
        assert!(config.countdown);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = config(&[("SWEEPER_WIDTH", "wide"), ("SWEEPER_COUNTDOWN", "maybe")]);
        assert_eq!(config.params.width, 9);
        assert!(!config.countdown);
    }
}

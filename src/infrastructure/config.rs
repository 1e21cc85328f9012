use crate::application::TransportPolicy;
use crate::domain::Dimensions;
use crate::infrastructure::client::DEFAULT_BASE_URL;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Swallow,
    DispatchFail,
}

impl From<PolicyArg> for TransportPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Swallow => TransportPolicy::Swallow,
            PolicyArg::DispatchFail => TransportPolicy::DispatchFail,
        }
    }
}

/// Command line settings for the maze client.
#[derive(Parser, Debug, Clone)]
#[command(name = "pony-maze", about = "Terminal client for the pony maze challenge")]
pub struct Settings {
    /// Base URL of the maze service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Player name sent when creating a maze
    #[arg(long, default_value = "rarity")]
    pub player_name: String,
    #[arg(long, default_value_t = 15)]
    pub width: usize,
    #[arg(long, default_value_t = 15)]
    pub height: usize,
    /// File receiving the log output (the terminal is taken by the UI)
    #[arg(long, default_value = "pony-maze.log")]
    pub log_file: PathBuf,
    /// What to do when the service cannot be reached
    #[arg(long, value_enum, default_value_t = PolicyArg::Swallow)]
    pub transport_policy: PolicyArg,
}

impl Settings {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            player_name: "rarity".to_string(),
            width: 15,
            height: 15,
            log_file: PathBuf::from("pony-maze.log"),
            transport_policy: PolicyArg::Swallow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parsed_defaults() {
        let parsed = Settings::parse_from(["pony-maze"]);
        let default = Settings::default();
        assert_eq!(parsed.base_url, default.base_url);
        assert_eq!(parsed.player_name, "rarity");
        assert_eq!(parsed.dimensions(), Dimensions { width: 15, height: 15 });
        assert_eq!(parsed.log_file, default.log_file);
        assert_eq!(parsed.transport_policy, PolicyArg::Swallow);
    }

    #[test]
    fn test_overrides() {
        let parsed = Settings::parse_from([
            "pony-maze",
            "--base-url",
            "http://localhost:3000",
            "--player-name",
            "Fluttershy",
            "--width",
            "20",
            "--height",
            "25",
            "--transport-policy",
            "dispatch-fail",
        ]);
        assert_eq!(parsed.base_url, "http://localhost:3000");
        assert_eq!(parsed.player_name, "Fluttershy");
        assert_eq!(parsed.dimensions(), Dimensions { width: 20, height: 25 });
        assert_eq!(
            TransportPolicy::from(parsed.transport_policy),
            TransportPolicy::DispatchFail
        );
    }
}

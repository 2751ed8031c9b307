use anyhow::Context;
use klondike_core::GameConfig;
use std::fs;
use std::path::Path;

pub const SEED_ENV: &str = "KLONDIKE_SEED";

/// Reads a JSON game config; missing fields take their defaults.
pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_game_config(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_game_config(raw: &str) -> anyhow::Result<GameConfig> {
    Ok(serde_json::from_str(raw)?)
}

/// `--seed` beats `KLONDIKE_SEED`, which beats the config file.
pub fn resolve_seed(config: &mut GameConfig, flag: Option<u64>) -> anyhow::Result<()> {
    if let Some(seed) = flag {
        config.seed = Some(seed);
        return Ok(());
    }
    if let Ok(value) = std::env::var(SEED_ENV) {
        let seed = value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_ENV}={value} is not a valid seed"))?;
        config.seed = Some(seed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_core::FoundationDrop;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn empty_object_is_default_config() {
        let config = parse_game_config("{}").expect("parse");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = parse_game_config(
            r#"{"seed": 42, "foundation_drop": "whole_group", "auto_reveal": true}"#,
        )
        .expect("parse");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.foundation_drop, FoundationDrop::WholeGroup);
        assert!(config.auto_reveal);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(parse_game_config(r#"{"foundation_drop": "sometimes"}"#).is_err());
    }

    #[test]
    fn seed_flag_overrides_file() {
        let mut config = GameConfig::seeded(1);
        resolve_seed(&mut config, Some(2)).expect("resolve");
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn load_from_file() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0);
        let file = std::env::temp_dir().join(format!("klondike_config_{nanos}.json"));
        std::fs::write(&file, r#"{"auto_reveal": true}"#).expect("write");
        let config = load_game_config(&file).expect("load");
        assert!(config.auto_reveal);
        assert_eq!(config.seed, None);
        let _ = std::fs::remove_file(file);
        assert!(load_game_config(Path::new("/nonexistent/klondike.json")).is_err());
    }
}

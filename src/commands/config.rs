//! Config command - get and set configuration values

use crate::{
    Result, SvdbError,
    cli::ConfigCommands,
    config::SvdbConfig,
};

/// Split `key=value`
///
/// # Errors
///
/// Returns `SvdbError::InvalidInput` if there is no `=`.
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| SvdbError::InvalidInput("Invalid format. Use: svenskdb config set key=value".into()))
}

/// Execute the config command
///
/// # Errors
///
/// Returns `SvdbError` for malformed settings, unknown keys or save failures.
pub fn execute(mut config: SvdbConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => println!("{}", config.get(key)?),
        ConfigCommands::Path => println!("{}", SvdbConfig::config_path()?.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("flag_style = code").unwrap(), ("flag_style", "code"));
        assert_eq!(parse_setting("dataset=").unwrap(), ("dataset", ""));
        assert!(matches!(parse_setting("quiet"), Err(SvdbError::InvalidInput(_))));
    }
}

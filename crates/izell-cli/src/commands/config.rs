use anyhow::Result;

use izell_core::AppConfig;

/// Print the resolved configuration as TOML.
pub fn run(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

//! Config subcommands handler

use anyhow::Result;

use puml2lib::theme::current_theme;
use puml2lib::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print the configuration file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if config_path.exists() {
        println!(
            "{}",
            theme.warning_text(&format!(
                "Config already exists: {}",
                config_path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", config_path.display()))
    );
    Ok(())
}

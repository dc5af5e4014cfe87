//! Theme commands for CLI.

use clap::Subcommand;
use dailydeck_core::{Config, Theme};

use super::{open_dashboard, CmdResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Switch between dark and light
    Toggle,
    /// Set the theme explicitly
    Set {
        /// "dark" or "light"
        theme: Theme,
    },
}

pub fn run(action: ThemeAction, config: &Config) -> CmdResult {
    let mut dash = open_dashboard(config)?;

    let theme = match action {
        ThemeAction::Get => dash.theme(),
        ThemeAction::Toggle => dash.toggle_theme()?,
        ThemeAction::Set { theme } => dash.set_theme(theme)?,
    };
    println!("{theme}");
    Ok(())
}

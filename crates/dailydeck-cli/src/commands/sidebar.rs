//! Sidebar commands for CLI.

use clap::Subcommand;
use dailydeck_core::Config;

use super::{open_dashboard, CmdResult};

#[derive(Subcommand)]
pub enum SidebarAction {
    /// Print whether the sidebar is collapsed
    Status,
    /// Collapse the sidebar
    Collapse,
    /// Expand the sidebar
    Expand,
    /// Apply the layout rule for a viewport width in pixels
    Fit {
        width: u32,
    },
}

pub fn run(action: SidebarAction, config: &Config) -> CmdResult {
    let mut dash = open_dashboard(config)?;

    let collapsed = match action {
        SidebarAction::Status => dash.sidebar_collapsed(),
        SidebarAction::Collapse => dash.set_sidebar_collapsed(true)?,
        SidebarAction::Expand => dash.set_sidebar_collapsed(false)?,
        SidebarAction::Fit { width } => dash.fit_sidebar(width)?,
    };
    println!("{}", if collapsed { "collapsed" } else { "expanded" });
    Ok(())
}

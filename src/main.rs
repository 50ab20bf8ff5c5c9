//! portal-nav CLI - permission-scoped navigation menu tool
//!
//! Usage: portal-nav <COMMAND>
//!
//! Commands:
//!   resolve  Resolve the active branch and route decision for a location
//!   fetch    Fetch the menu for a product from the menu service
//!   routes   List every route reachable from a menu descriptor
//!   icon     Parse icon markup

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use portal_nav::commands::{self, FetchArgs};
use portal_nav::presentation::output::print_config_warnings;
use portal_nav::presentation::{Cli, Commands};
use portal_nav::ui::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_root = std::env::current_dir().ok();
    let (config, warnings) = commands::load_config(cli.config.as_deref(), project_root.as_deref())?;
    print_config_warnings(&warnings);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match cli.command {
        Commands::Resolve {
            menu,
            path,
            toggles,
            strict,
        } => commands::cmd_resolve(&ui, &config, &menu, &path, &toggles, strict),
        Commands::Fetch {
            product,
            package,
            token,
            path,
            save,
            from_dir,
        } => commands::cmd_fetch(
            &ui,
            &config,
            FetchArgs {
                product,
                package,
                token,
                path,
                save,
                from_dir,
            },
        ),
        Commands::Routes { menu } => commands::cmd_routes(&ui, &menu),
        Commands::Icon { markup } => commands::cmd_icon(&ui, &markup),
    }
}

/// `RUST_LOG` wins; otherwise the level follows the `-v` count.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

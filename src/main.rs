//! tola-data - load site data sources and emit them as JSON.

use anyhow::{Context as _, Result};
use clap::Parser;
use std::{fs, path::Path};
use tola_data::{
    cli::{Cli, Commands},
    config::SiteConfig,
    context::Context,
    data::DataGenerator,
    hooks::Hooks,
    log,
    readers::Readers,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { output } => build_data(&config, output.as_deref()),
        Commands::Check { name } => {
            let generator = DataGenerator::new(&config, Readers::new(&config), Hooks::new());
            if generator.is_supported(name) {
                println!("{name}: supported");
            } else {
                println!("{name}: unsupported");
            }
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("warn"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn build_data(config: &SiteConfig, output: Option<&Path>) -> Result<()> {
    let mut generator = DataGenerator::new(config, Readers::new(config), Hooks::new());
    let mut ctx = Context::new();
    generator.generate_context(&mut ctx);

    if !ctx.failed_paths().is_empty() {
        log!("warn"; "{} file(s) failed to load", ctx.failed_paths().len());
    }

    let json = ctx.data_to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            log!("data"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

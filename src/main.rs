use anyhow::Context;
use clap::Parser;
use coffee_shop_settings::{
    config::{DEFAULT_CONFIG_DIR, VARIANT_ENV_VAR},
    shared::{LogFormat, LoggingUtils},
    DeploymentVariant, EnvironmentRenderer, RenderFormat, SettingsLoader, SettingsProvider,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "coffee-shop-settings",
    about = "Load, validate and render the coffee shop client environment",
    version
)]
struct Args {
    /// Deployment variant to load (development, production)
    #[arg(short, long, env = VARIANT_ENV_VAR, default_value = "development")]
    variant: DeploymentVariant,

    /// Directory holding Settings.* and the variant files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Output format (typescript, json, toml)
    #[arg(short, long, default_value = "typescript")]
    format: RenderFormat,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only validate and print the fingerprint
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = LoggingUtils::initialize(&args.log_level, args.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    info!(variant = %args.variant, config_dir = %args.config_dir.display(), "Loading settings");

    let loader = SettingsLoader::new(args.variant).with_config_dir(&args.config_dir);
    let provider = SettingsProvider::from_loader(&loader)
        .with_context(|| format!("{} settings are not usable", args.variant))?;

    if args.check {
        println!("{}", provider.settings().fingerprint());
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            EnvironmentRenderer::write_to(provider.settings(), args.format, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let rendered = EnvironmentRenderer::render(provider.settings(), args.format)?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

//! plur-price - Classify social network accounts and price a post on each

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use libplurprice::accounts::demo_roster;
use libplurprice::logging::LoggingConfig;
use libplurprice::report::{quote_all, render_text};
use libplurprice::{Config, FacebookAccount, PlurpriceError, PriceCalculator};

#[derive(Parser, Debug)]
#[command(name = "plur-price")]
#[command(version, about = "Classify social network accounts and price a post on each")]
#[command(long_about = r#"Print a reach tier summary for each account, then the price per post.

Without a roster in the config file the five demonstration accounts are used.

CONFIG FILE (TOML):
    [rates]
    facebook = 0.5

    [[accounts]]
    provider = "youtube"
    screen_name = "ElCanalDelRey"
    unique_id = "15319024"
    full_name = "Jose Camargo"
    follower_count = 200

EXIT CODES:
    0 - Success
    1 - Configuration error
    2 - Pricing error (no rate for a provider)
    3 - Invalid input (e.g. negative follower count)
"#)]
struct Cli {
    /// Path to config file (defaults to ~/.config/plurprice/config.toml)
    #[arg(short, long, value_name = "PATH", env = "PLURPRICE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    LoggingConfig::from_env(cli.verbose).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<PlurpriceError>()
            .map(PlurpriceError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!("plur-price started with args: {:?}", cli);

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let calculator = PriceCalculator::from_rates(&config.rates)?;
    let accounts = if config.accounts.is_empty() {
        demo_roster()
    } else {
        config.build_accounts()?
    };

    tracing::debug!(
        accounts = accounts.len(),
        providers = calculator.len(),
        "Pricing accounts"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.format.as_str() {
        "json" => {
            let quotes = quote_all(&calculator, &accounts)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&quotes)?)?;
        }
        _ => {
            for line in render_text(&calculator, &accounts)? {
                writeln!(out, "{}", line)?;
            }
            writeln!(out, "{:?}", FacebookAccount::default())?;
        }
    }

    Ok(())
}

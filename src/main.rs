use clap::Parser;
use okaynav::Align;
use okaynav::core::ItemSpec;
use okaynav::core::config::{self, ResolvedConfig};
use okaynav::headless;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "okaynav", about = "Navigation bar that collapses by priority")]
struct Args {
    /// Config file (default: ~/.okaynav/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Free cells kept before collapsing
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Edge the navigation hugs
    #[arg(short, long, value_enum)]
    align: Option<Align>,

    /// Navigation item as LABEL or LABEL=PRIORITY; repeat in display order.
    /// Replaces the configured items.
    #[arg(short, long = "item", value_name = "ITEM")]
    items: Vec<String>,

    /// Settle the header at WIDTH cells, print the layout as JSON and exit
    #[arg(long, value_name = "WIDTH")]
    simulate: Option<u16>,
}

fn load(args: &Args) -> std::io::Result<ResolvedConfig> {
    let file_config = match &args.config {
        Some(path) => config::load_config_from(path).map_err(std::io::Error::other)?,
        None => config::load_config().unwrap_or_else(|e| {
            log::warn!("Ignoring config file: {}", e);
            Default::default()
        }),
    };

    let mut resolved = config::resolve(&file_config, args.threshold);
    if let Some(align) = args.align {
        resolved.options.align_right = align.is_right();
    }
    if !args.items.is_empty() {
        resolved.items = args.items.iter().map(|arg| ItemSpec::parse(arg)).collect();
    }
    Ok(resolved)
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to okaynav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("okaynav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load(&args)?;
    log::info!(
        "okayNav starting with {} items (threshold {})",
        config.items.len(),
        config.options.threshold
    );

    if let Some(width) = args.simulate {
        let report = headless::simulate(&config, width).map_err(std::io::Error::other)?;
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    okaynav::tui::run(config)
}

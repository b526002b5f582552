use anyhow::{Context, Result};
use clap::Parser;
use primer::{Logger, Section, Tour, TourConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Walk through ordered collections, aggregation, sorting and greeters")]
struct Cli {
    /// Run only these sections (repeatable). Defaults to all of them.
    #[arg(long = "section", short = 's', value_parser = parse_section)]
    sections: Vec<Section>,

    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    age: Option<u32>,

    /// Print the section names and exit
    #[arg(long)]
    list: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_section(raw: &str) -> std::result::Result<Section, String> {
    raw.parse::<Section>().map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("primer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for section in Section::ALL {
            println!("{}", section);
        }
        return Ok(());
    }

    let mut config = TourConfig::new().sections(&cli.sections);
    if let Some(first_name) = &cli.first_name {
        config = config.first_name(first_name);
    }
    if let Some(last_name) = &cli.last_name {
        config = config.last_name(last_name);
    }
    if let Some(age) = cli.age {
        config = config.age(age);
    }

    let mut logger = Logger::stdout();
    Tour::new(config)
        .run(&mut logger)
        .context("tour aborted while writing output")?;

    Ok(())
}

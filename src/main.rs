use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use indenter::{Indenter, IndenterConfig};

/// Prefix lines of text with a repeated indentation symbol
#[derive(Parser, Debug)]
#[command(name = "indenter", version, about)]
struct Cli {
    /// Lines to indent. Reads stdin when none are given
    text: Vec<String>,

    /// JSON config file with `start` and `symbol` fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial indentation depth
    #[arg(short, long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Symbol repeated once per level
    #[arg(long, conflicts_with = "tab")]
    symbol: Option<String>,

    /// Indent with tabs
    #[arg(long)]
    tab: bool,

    /// Extra levels to nest the output by
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    nest: i64,
}

impl Cli {
    fn indenter(&self) -> Result<Indenter> {
        let mut config = match &self.config {
            Some(path) => IndenterConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => IndenterConfig::default(),
        };

        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(symbol) = &self.symbol {
            config.symbol = symbol.clone();
        } else if self.tab {
            config.symbol = "\t".to_string();
        }

        debug!(?config, "resolved indenter config");
        Ok(Indenter::from(config))
    }
}

fn write_lines(ind: &Indenter, lines: &[String], out: &mut impl Write) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", ind + line)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ind = cli.indenter()?;

    let lines = if cli.text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        cli.text.clone()
    };

    info!(lines = lines.len(), nest = cli.nest, depth = ind.depth(), "indenting input");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let nested = &ind + cli.nest;
    write_lines(&nested, &lines, &mut out)?;
    out.flush()?;

    Ok(())
}

//! Market table - terminal host
//!
//! Renders one page of the market table, or runs an interactive session where
//! each stdin line is a search box edit (debounced) or a `:command`.

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::select;
use market_table::{
    config::{self, TableConfig},
    dataset::Dataset,
    debounce::SearchDebouncer,
    format::{self, ChangeTone},
    state::{TableAction, TableState, TableView},
    types::{CategoryFilter, SortDirection, SortKey},
};
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "market-table", version, about = "Filter, sort and page a market instrument table")]
struct Cli {
    /// Dataset file (.json or .toml); the built-in sample is used when omitted
    #[arg(short, long, env = "MARKET_TABLE_DATA")]
    data: Option<PathBuf>,

    /// Table config file (TOML); defaults to the platform config directory
    #[arg(short, long, env = "MARKET_TABLE_CONFIG")]
    config: Option<PathBuf>,

    /// Category filter: all, crypto or fiat
    #[arg(long)]
    category: Option<CategoryFilter>,

    /// Case-insensitive symbol search
    #[arg(short, long)]
    search: Option<String>,

    /// Sort column: assets, price, change, volume or market
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Rows per page; must be one of the configured page sizes
    #[arg(long)]
    page_size: Option<usize>,

    /// Read search edits and :commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::info!("Starting market table");

    let config = load_config(cli.config.as_ref())?;
    let dataset = match &cli.data {
        Some(path) => Dataset::load(path).with_context(|| format!("loading {:?}", path))?,
        None => Dataset::sample(),
    };
    tracing::info!("Loaded {} rows", dataset.len());

    let mut state = TableState::new(&config);
    apply_cli_actions(&cli, &mut state)?;

    if cli.interactive {
        run_interactive(&config, &dataset, state)
    } else {
        render(&config, &state.view(dataset.rows()));
        Ok(())
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn,market_table=info",
        1 => "info,market_table=debug",
        _ => "debug,market_table=trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<TableConfig> {
    match path {
        Some(path) => {
            TableConfig::load(path).with_context(|| format!("loading config {:?}", path))
        }
        None => Ok(config::default_config_path()
            .map(TableConfig::load_or_default)
            .unwrap_or_default()),
    }
}

/// Replay command-line options as the clicks a user would make
fn apply_cli_actions(cli: &Cli, state: &mut TableState) -> Result<()> {
    let now = Instant::now();
    if let Some(category) = cli.category {
        state.handle(TableAction::SelectCategory(category), now)?;
    }
    if let Some(size) = cli.page_size {
        state.handle(TableAction::ChangePageSize(size), now)?;
    }
    if let Some(key) = cli.sort {
        state.handle(TableAction::RequestSort(key), now)?;
        let descending = state.sort().map(|s| s.direction) == Some(SortDirection::Descending);
        if cli.desc != descending {
            state.handle(TableAction::RequestSort(key), now)?;
        }
    }
    if let Some(term) = &cli.search {
        state.apply_search(term.clone());
    }
    state.handle(TableAction::ChangePage(cli.page), now)?;
    Ok(())
}

fn run_interactive(config: &TableConfig, dataset: &Dataset, mut state: TableState) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("starting timer runtime")?;
    let (mut debouncer, settled_rx) =
        SearchDebouncer::new(runtime.handle().clone(), config.debounce());

    let (line_tx, line_rx) = crossbeam_channel::unbounded::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!(
        "Type to search. Commands: :category <all|crypto|fiat>, :sort <column>, \
         :page <n>, :size <n>, :quit"
    );
    render(config, &state.view(dataset.rows()));

    loop {
        select! {
            recv(line_rx) -> line => {
                let Ok(line) = line else { break };
                match line.strip_prefix(':') {
                    Some("quit") | Some("q") => break,
                    Some(command) => match parse_command(command) {
                        Ok(action) => match state.handle(action, Instant::now()) {
                            Ok(()) => render(config, &state.view(dataset.rows())),
                            Err(e) => println!("{}", e),
                        },
                        Err(e) => println!("{}", e),
                    },
                    None => debouncer.schedule(line),
                }
            }
            recv(settled_rx) -> term => {
                let Ok(term) = term else { break };
                state.apply_search(term);
                render(config, &state.view(dataset.rows()));
            }
        }
    }

    debouncer.cancel();
    Ok(())
}

fn parse_command(command: &str) -> Result<TableAction> {
    let (name, arg) = command
        .split_once(' ')
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));
    let action = match name {
        "category" | "c" => TableAction::SelectCategory(arg.parse()?),
        "sort" | "s" => TableAction::RequestSort(arg.parse()?),
        "page" | "p" => TableAction::ChangePage(arg.parse().context("page must be a number")?),
        "size" => TableAction::ChangePageSize(arg.parse().context("size must be a number")?),
        other => anyhow::bail!("Unknown command: {}", other),
    };
    Ok(action)
}

fn render(config: &TableConfig, view: &TableView<'_>) {
    let search = if view.search_text.is_empty() {
        String::new()
    } else {
        format!("  search: {:?}", view.search_text)
    };
    println!();
    println!("{}  [{}]{}", config.title, view.category, search);

    let header: Vec<String> = SortKey::ALL
        .iter()
        .map(|key| match view.sort_glyph(*key) {
            Some(glyph) => format!("{} {}", key.label(), glyph),
            None => key.label().to_string(),
        })
        .collect();
    println!(
        "   {:<8} {:>14} {:>10} {:>14} {:>14}",
        header[0], header[1], header[2], header[3], header[4]
    );

    if view.rows.is_empty() {
        println!("   (no rows)");
    }
    for row in &view.rows {
        let cells = format::format_row(row, view.change_sign);
        let change = match cells.change.tone {
            ChangeTone::Negative => format!("{} ↓", cells.change.text),
            ChangeTone::Positive | ChangeTone::Neutral => cells.change.text,
        };
        println!(
            "{}  {:<8} {:>14} {:>10} {:>14} {:>14}",
            cells.initial, cells.symbol, cells.price, change, cells.volume, cells.market_cap
        );
    }
    println!("rows per page: {}   {}", view.page.size, view.range_label);
}

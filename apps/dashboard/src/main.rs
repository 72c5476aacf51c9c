use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use order_store::{FileOrderSource, HttpOrderSource, OrderSource, OrderStore, OrdersAction};
use orders_table::{PageSize, RowField, SortDirection, TableView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use url::Url;

mod commands;
mod config;
mod dashboard;
mod render;

use commands::{parse_command, HELP};
use config::{load_settings, Settings};
use dashboard::{Dashboard, Outcome};

#[derive(Parser, Debug)]
#[command(name = "orders-dashboard", about = "Sortable, paginated view of customer orders")]
struct Args {
    /// Settings file; ignored when missing.
    #[arg(long, default_value = "dashboard.toml")]
    config: PathBuf,
    #[arg(long)]
    orders_url: Option<String>,
    /// Read orders from a local JSON file instead of the remote endpoint.
    #[arg(long, conflicts_with = "orders_url")]
    orders_file: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<PageSize>,
    #[arg(long)]
    sort: Option<RowField>,
    #[arg(long, requires = "sort")]
    desc: bool,
    /// Keep reading commands from stdin.
    #[arg(long, short)]
    interactive: bool,
    /// Print the visible rows as JSON and exit.
    #[arg(long, conflicts_with = "interactive")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    apply_args(&mut settings, &args);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = Arc::new(OrderStore::new(build_source(&settings)?));
    let mut view = TableView::new().with_page_size(settings.page_size);
    if let Some(field) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view = view.with_sort(field, direction);
    }
    let dashboard = Dashboard::new(view, settings.logo.clone());

    if args.interactive {
        run_interactive(store, dashboard).await
    } else {
        run_once(&store, &dashboard, args.json).await
    }
}

fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(url) = &args.orders_url {
        settings.orders_url = url.clone();
        settings.orders_file = None;
    }
    if let Some(path) = &args.orders_file {
        settings.orders_file = Some(path.clone());
    }
    if let Some(size) = args.page_size {
        settings.page_size = size;
    }
}

fn build_source(settings: &Settings) -> Result<Arc<dyn OrderSource>> {
    if let Some(path) = &settings.orders_file {
        info!(path = %path.display(), "reading orders from file");
        return Ok(Arc::new(FileOrderSource::new(path.clone())));
    }

    let url = Url::parse(&settings.orders_url)
        .with_context(|| format!("invalid orders url '{}'", settings.orders_url))?;
    info!(%url, timeout_secs = settings.request_timeout_secs, "fetching orders over http");
    let source = HttpOrderSource::new(url, settings.request_timeout())
        .context("failed to build http client")?;
    Ok(Arc::new(source))
}

async fn run_once(store: &OrderStore, dashboard: &Dashboard, json: bool) -> Result<()> {
    store.fetch_orders().await;
    let state = store.snapshot();

    if !json {
        println!("{}", dashboard.render(&state));
        return Ok(());
    }

    if state.meta.is_error {
        bail!(render::ERROR);
    }
    let rows = dashboard
        .view()
        .visible_rows(&dashboard.tab_state(&state).orders);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

async fn run_interactive(store: Arc<OrderStore>, mut dashboard: Dashboard) -> Result<()> {
    let mut updates = store.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    start_fetch(&store);
    println!("{}", dashboard.render(&store.snapshot()));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                println!("{}", dashboard.render(&state));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read command")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        eprintln!("{err}; type 'help' for commands");
                        continue;
                    }
                };
                let state = store.snapshot();
                match dashboard.apply(command, &state) {
                    Outcome::Redraw => println!("{}", dashboard.render(&state)),
                    Outcome::ShowHelp => println!("{}", HELP),
                    Outcome::Refresh => start_fetch(&store),
                    Outcome::Quit => break,
                }
            }
        }
    }

    debug!("dashboard closed");
    Ok(())
}

/// Marks the store as loading before the request is spawned, so the next
/// render already shows the loading state.
fn start_fetch(store: &Arc<OrderStore>) {
    store.dispatch(OrdersAction::FetchStarted);
    let store = Arc::clone(store);
    tokio::spawn(async move { store.fetch_orders().await });
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;

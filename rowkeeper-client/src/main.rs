//! `rowkeeper`: command-line client for the Rowkeeper list server.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rowkeeper_client::{
    ApiClient, ApiClientAdapter, ApiService, DEFAULT_SERVER_URL, ListController,
    view::{ListView, PAGE_LIMIT, RowBounds, ScrollMetrics, ViewMessage},
};
use rowkeeper_model::prelude::{Item, ItemId, PageRequest};

/// Height used to synthesise row geometry for scripted drags.
const ROW_HEIGHT: f32 = 32.0;

#[derive(Parser, Debug)]
#[command(name = "rowkeeper")]
#[command(about = "Browse, select and reorder items on a Rowkeeper server")]
struct Cli {
    /// Server base URL
    #[arg(long, global = true, env = "ROWKEEPER_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single page
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = PAGE_LIMIT)]
        limit: u64,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Replace the server-side selection
    Select {
        /// Item ids, e.g. `select 3 17 42`
        ids: Vec<ItemId>,
    },
    /// Replace the server-side custom order
    Order {
        /// Item ids in their new leading order
        ids: Vec<ItemId>,
    },
    /// Load the list view and scroll through several pages
    Browse {
        #[arg(long, default_value = "")]
        search: String,
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u64,
    },
    /// Drag a row of the first page to a new position and persist the order
    Move {
        /// Displayed index of the row to pick up
        #[arg(long)]
        from: usize,
        /// Displayed index to drop it at
        #[arg(long)]
        to: usize,
        #[arg(long, default_value = "")]
        search: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.server.clone())
        .context("failed to create HTTP client")?;
    let api: Arc<dyn ApiService> =
        Arc::new(ApiClientAdapter::new(Arc::new(client)));

    match cli.command {
        Command::List {
            page,
            limit,
            search,
        } => {
            let request = PageRequest::new(page, limit, search)?;
            let result = api.fetch_page(&request).await?;
            print_rows(&result.items, &result.selected_ids);
            println!(
                "page {}/{} ({} matching items)",
                result.current_page, result.total_pages, result.total_items
            );
        }
        Command::Select { ids } => {
            let ack = api.save_selection(&ids).await?;
            println!("selected: {}", join_ids(&ack.selected_ids));
        }
        Command::Order { ids } => {
            let ack = api.save_order(&ids).await?;
            println!("order: {}", join_ids(&ack.order));
        }
        Command::Browse { search, pages } => {
            let mut controller = load(api, search).await;
            for _ in 1..pages {
                if controller.view().is_exhausted() {
                    break;
                }
                controller.dispatch(ViewMessage::Scrolled(
                    ScrollMetrics::at_bottom(600.0, 1000.0),
                ));
                controller.settle().await;
            }
            print_view(controller.view());
        }
        Command::Move { from, to, search } => {
            let mut controller = load(api, search).await;

            let len = controller.view().items().len();
            if from >= len || to >= len {
                bail!("indices must be below {len}, the number of loaded rows");
            }

            controller.dispatch(ViewMessage::DragStarted { index: from });
            if from != to {
                controller.dispatch(hover_towards(from, to));
            }
            controller.dispatch(ViewMessage::DragEnded);
            controller.settle().await;
            info!("moved row {} to {}", from, to);
            print_view(controller.view());
        }
    }

    Ok(())
}

async fn load(api: Arc<dyn ApiService>, search: String) -> ListController {
    let mut controller =
        ListController::with_view(api, ListView::with_search(search));
    controller.dispatch(ViewMessage::Mounted);
    controller.settle().await;
    controller
}

/// Hover message that places the pointer on the side of row `to` that lets
/// a row coming from `from` pass the midpoint.
fn hover_towards(from: usize, to: usize) -> ViewMessage {
    let bounds = RowBounds::for_row(to, ROW_HEIGHT);
    let pointer_y = if from < to {
        bounds.bottom - 1.0
    } else {
        bounds.top + 1.0
    };
    ViewMessage::DragHovered {
        index: to,
        bounds,
        pointer_y,
    }
}

fn print_view(view: &ListView) {
    if view.shows_placeholder() {
        println!("Loading data...");
        return;
    }
    print_rows(&view.rows(), view.selected());
    println!(
        "{} of {} items loaded",
        view.items().len(),
        view.total_items()
    );
}

fn print_rows(items: &[Item], selected: &[ItemId]) {
    for item in items {
        let mark = if selected.contains(&item.id) { "x" } else { " " };
        println!("[{mark}] {:>8}  {}", item.id.get(), item.value);
    }
}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

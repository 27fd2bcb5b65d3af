//! Paygraph CLI - inspect the schema catalog and query a Hasura endpoint.
//!
//! # Usage
//!
//! ```bash
//! # List tables and views
//! paygraph tables
//!
//! # Columns, constraints, relationships and root fields of one table
//! paygraph describe checkout
//!
//! # Print the document sent for a root field
//! paygraph document by_pk checkout --with seller
//!
//! # Query rows
//! paygraph select checkout --where '{"is_archived": {"_eq": false}}' --limit 10
//! paygraph get checkout --pk '{"id": "6f1c7d1e-59a4-4c55-9a9a-0c3f2f1b8f11"}'
//! paygraph aggregate transaction --where '{"is_test": {"_eq": false}}' --format yaml
//!
//! # Follow a live query
//! paygraph watch webhook_event --limit 20
//!
//! # Compare the live schema with the catalog
//! paygraph verify
//! ```
//!
//! # Environment Variables
//!
//! - `PAYGRAPH_*` - endpoint and credentials, see `paygraph_client::config`
//! - `RUST_LOG` - log filter (default: `info`)
//! - `PAYGRAPH_LOG_FORMAT` - set to `json` for JSON log lines

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::query::{ReadArgs, SelectArgs};
use output::Format;

#[derive(Parser)]
#[command(name = "paygraph")]
#[command(author, version, about = "Paygraph schema and query tools")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every table and view
    Tables,
    /// Describe one table or view
    Describe {
        /// Table or view name
        table: String,
    },
    /// Print the GraphQL document for a root field
    Document {
        /// Root field kind (`select`, `by_pk`, `aggregate`, `stream`, `insert`, ...)
        operation: String,
        /// Table or view name
        table: String,
        /// Relationship to embed (dotted for nesting); repeatable
        #[arg(long = "with")]
        with: Vec<String>,
        /// Render a read field as a subscription
        #[arg(long)]
        subscribe: bool,
        /// Also select `nodes` in aggregates
        #[arg(long)]
        nodes: bool,
    },
    /// Select rows
    Select(SelectArgs),
    /// Fetch one row by primary key
    Get {
        /// Table name
        table: String,
        /// Primary key columns as a JSON object
        #[arg(long)]
        pk: String,
        /// Relationship to embed; repeatable
        #[arg(long = "with")]
        with: Vec<String>,
    },
    /// Aggregate rows
    Aggregate {
        #[command(flatten)]
        read: ReadArgs,
        /// Also return the matching rows
        #[arg(long)]
        nodes: bool,
    },
    /// Print every change of a live query until interrupted
    Watch(SelectArgs),
    /// Compare the live schema with the catalog
    Verify,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries command output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let is_json = std::env::var("PAYGRAPH_LOG_FORMAT").is_ok_and(|v| v == "json");
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;
    match cli.command {
        Commands::Tables => commands::catalog::tables(format)?,
        Commands::Describe { table } => commands::catalog::describe(&table, format)?,
        Commands::Document {
            operation,
            table,
            with,
            subscribe,
            nodes,
        } => commands::catalog::document(&operation, &table, &with, subscribe, nodes)?,
        Commands::Select(args) => commands::query::select(&args, format).await?,
        Commands::Get { table, pk, with } => {
            commands::query::get(&table, &pk, &with, format).await?;
        }
        Commands::Aggregate { read, nodes } => {
            commands::query::aggregate(&read, nodes, format).await?;
        }
        Commands::Watch(args) => commands::query::watch(&args, format).await?,
        Commands::Verify => commands::query::verify(format).await?,
    }
    Ok(())
}

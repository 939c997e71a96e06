use std::io;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use engine::{Category, Engine, EngineError, export, require_details};

mod report;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "expenses")]
#[command(about = "Personal expense analyzer: record, list and summarize expenses")]
struct Cli {
    /// Settings file, without extension (TOML).
    #[arg(long, default_value = "settings")]
    config: String,

    /// Override the database file path.
    #[arg(long, env = "EXPENSES_DATABASE")]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new expense.
    Add(AddArgs),
    /// Print every recorded expense.
    List,
    /// Delete the expense with the given id.
    Delete(DeleteArgs),
    /// Totals per category and per month, with the budget alert.
    Summary(SummaryArgs),
    /// Write the expense table as CSV.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Purchase date (YYYY-MM-DD), defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    category: Category,
    #[arg(long)]
    item: String,
    #[arg(long, default_value_t = 1)]
    quantity: i64,
    /// Amount per item.
    #[arg(long)]
    amount: f64,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    #[arg(allow_negative_numbers = true)]
    id: i64,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Budget limit; overrides the configured one. `0` disables the alert.
    #[arg(long)]
    budget: Option<f64>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Destination file, `-` for stdout.
    #[arg(long, short, default_value = "expenses.csv")]
    output: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut settings = settings::Settings::new(&cli.config)?;
    if let Some(path) = cli.database {
        settings.storage.path = path;
        settings.storage.in_memory = false;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expenses={level},engine={level},migration={level}",
            level = settings.app.level
        ))
        .with_writer(io::stderr)
        .init();

    let engine = Engine::open(&settings.database_url()).await?;
    engine.ensure_schema().await?;

    let result = run(&engine, cli.command, settings.budget).await;
    let closed = engine.close().await;

    match settle(result, closed) {
        Err(err) if err.is_validation() => {
            tracing::warn!("rejected input: {err}");
            eprintln!("warning: {err}");
            std::process::exit(2);
        }
        other => other.map_err(Into::into),
    }
}

/// The command's own error wins over a failure to close the store.
fn settle(
    result: Result<(), EngineError>,
    closed: Result<(), EngineError>,
) -> Result<(), EngineError> {
    match (result, closed) {
        (Err(err), Err(close_err)) => {
            tracing::warn!("failed to close expense store: {close_err}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), closed) => closed,
    }
}

async fn run(engine: &Engine, command: Command, budget: f64) -> Result<(), EngineError> {
    match command {
        Command::Add(args) => {
            let date = args.date.unwrap_or_else(|| Local::now().date_naive());
            require_details(args.quantity, args.amount)?;
            let id = engine
                .insert(date, args.category, &args.item, args.quantity, args.amount)
                .await?;
            println!("Expense added with id {id}.");
        }
        Command::List => {
            let expenses = engine.fetch_all().await?;
            print!("{}", report::expenses_table(&expenses));
        }
        Command::Delete(args) => {
            if engine.delete(args.id).await? {
                println!("Expense {} deleted.", args.id);
            } else {
                println!("No expense with id {}.", args.id);
            }
        }
        Command::Summary(args) => {
            let expenses = engine.fetch_all().await?;
            print!(
                "{}",
                report::summary(&expenses, args.budget.unwrap_or(budget))
            );
        }
        Command::Export(args) => {
            let expenses = engine.fetch_all().await?;
            if args.output == "-" {
                export::write_csv(&expenses, io::stdout().lock())?;
            } else {
                export::export_to_path(&expenses, &args.output)?;
                println!("Exported {} expenses to {}.", expenses.len(), args.output);
            }
        }
    }
    Ok(())
}

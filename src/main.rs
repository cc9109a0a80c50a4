use std::path::PathBuf;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use transq::config::Config;
use transq::reader::read_transactions;
use transq::report::{date_filter_label, Report};
use transq::TransactionAnalyzer;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Transactions file, .json or .csv
    file: PathBuf,

    /// Config file path, defaults to <config dir>/transq/config.toml
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all transactions
    All,
    /// List distinct transaction types
    Types,
    /// Sum of all amounts
    Total,
    /// Sum of amounts on a date, omitted parts match anything
    TotalByDate {
        #[clap(long)]
        year: Option<i32>,
        #[clap(long)]
        month: Option<u32>,
        #[clap(long)]
        day: Option<u32>,
    },
    /// Transactions of the given type
    ByType { transaction_type: String },
    /// Transactions between two dates, inclusive
    Range { start: String, end: String },
    /// Transactions of the given merchant
    Merchant { name: String },
    /// Average amount
    Average,
    /// Transactions with amount between min and max, inclusive
    AmountRange {
        #[clap(allow_hyphen_values = true)]
        min: f64,
        #[clap(allow_hyphen_values = true)]
        max: f64,
    },
    /// Sum of debit amounts
    DebitTotal,
    /// Month with the most transactions
    ActiveMonth,
    /// Month with the most debit transactions
    ActiveDebitMonth,
    /// Whether debits or credits are more frequent
    Dominant,
    /// Transactions strictly before a date
    Before { date: String },
    /// Look up a transaction by id
    Find { id: String },
    /// List all descriptions
    Descriptions,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default(),
    };

    let analyzer = TransactionAnalyzer::with_amount_policy(read_transactions(&cli.file)?, config.amount_policy);
    let report = Report::new(&config.currency);

    let table = match cli.command {
        Command::All => report.transactions(&analyzer.all().iter().collect::<Vec<_>>()),
        Command::Types => report.values("Type", analyzer.unique_types()),
        Command::Total => report.amount("Total", analyzer.total_amount()?),
        Command::TotalByDate { year, month, day } => {
            report.amount(&date_filter_label(year, month, day), analyzer.total_amount_by_date(year, month, day)?)
        }
        Command::ByType { transaction_type } => report.transactions(&analyzer.by_type(&transaction_type)),
        Command::Range { start, end } => report.transactions(&analyzer.in_date_range(&start, &end)?),
        Command::Merchant { name } => report.transactions(&analyzer.by_merchant(&name)),
        Command::Average => report.amount("Average", analyzer.average_amount()?),
        Command::AmountRange { min, max } => report.transactions(&analyzer.by_amount_range(min, max)),
        Command::DebitTotal => report.amount("Debit total", analyzer.total_debit_amount()?),
        Command::ActiveMonth => report.values("Most active month", [analyzer.most_active_month()?]),
        Command::ActiveDebitMonth => report.values("Most active debit month", [analyzer.most_active_debit_month()?]),
        Command::Dominant => report.values("Dominant type", [analyzer.dominant_type()]),
        Command::Before { date } => report.transactions(&analyzer.before_date(&date)?),
        Command::Find { id } => match analyzer.find_by_id(&id) {
            Some(t) => report.transactions(&[t]),
            None => {
                info!("No transaction with id {id}");
                return Ok(());
            }
        },
        Command::Descriptions => report.values("Description", analyzer.descriptions()),
    };

    println!("{table}");

    Ok(())
}

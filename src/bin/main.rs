use clap::{Parser, Subcommand};

use teller::{Branch, Scenario, WithdrawalLimit};

/// A cli interface to the teller
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Carries out the instructions of a CSV file
    Run {
        /// The path to the instruction CSV file
        filename: std::path::PathBuf,
        /// The currency label accounts are opened with
        #[clap(long, default_value = teller::DEFAULT_CURRENCY)]
        currency: String,
        /// Whether withdrawals may empty an account (`inclusive`) or not (`exclusive`)
        #[clap(long, default_value = "inclusive")]
        limit: WithdrawalLimit,
        /// Print a CSV summary of all accounts after the instructions
        #[clap(long)]
        summary: bool,
    },
    /// Walks through the example scenarios
    Tour {
        /// Only run this scenario
        scenario: Option<Scenario>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Run { filename, currency, limit, summary } => run(filename, currency, limit, summary),
        Command::Tour { scenario } => tour(scenario),
    }
}

fn run(
    filename: std::path::PathBuf,
    currency: String,
    limit: WithdrawalLimit,
    summary: bool,
) -> anyhow::Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(filename)?;
    let mut branch = Branch::new()
        .with_limit(limit)
        .with_currency(currency);

    for notice in branch.handle_csv(&mut reader) {
        println!("{}", notice);
    }

    if summary {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(std::io::stdout());

        for account in branch.accounts().values() {
            writer.serialize(account)?;
        }
        writer.flush()?;
    }

    Ok(())
}

fn tour(scenario: Option<Scenario>) -> anyhow::Result<()> {
    let scenarios = match scenario {
        Some(scenario) => vec![scenario],
        None => Scenario::ALL.to_vec(),
    };

    for scenario in scenarios {
        println!("== {}", scenario.name());
        for notice in scenario.run()? {
            println!("{}", notice);
        }
    }

    Ok(())
}

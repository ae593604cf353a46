//! oxide-pgwriter CLI
//!
//! Command-line tool for escaping PostgreSQL literals and identifiers and
//! transcoding integer range notation.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_pgwriter::writer::{begin, begin_read_only, deferrable};
use oxide_pgwriter::{
    Endpoint, IntRange, IsolationLevel, PostgresDialect, SqlGenerator, SqlWriter,
    escape_identifier, format_range, parse_range,
};

/// Escape text and ranges for PostgreSQL.
#[derive(Parser)]
#[command(name = "oxide-pgwriter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Whether the server has `standard_conforming_strings` on.
    #[arg(
        long,
        global = true,
        env = "PGWRITER_STANDARD_CONFORMING_STRINGS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    standard_conforming_strings: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print TEXT as a quoted string literal.
    Literal {
        /// Text to escape.
        text: String,

        /// Print the escaped content without surrounding quotes.
        #[arg(long)]
        bare: bool,
    },

    /// Print TEXT as an identifier (quoted only when needed).
    Ident {
        /// Identifier to escape.
        text: String,
    },

    /// Parse range notation and print its canonical form.
    ParseRange {
        /// Range text, e.g. `[1,10)` or `empty`.
        text: String,

        /// Print the decoded range as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build range notation from endpoints.
    FormatRange {
        /// Lower endpoint (unbounded if omitted).
        #[arg(long, allow_hyphen_values = true)]
        lower: Option<i32>,

        /// Upper endpoint (unbounded if omitted).
        #[arg(long, allow_hyphen_values = true)]
        upper: Option<i32>,

        /// Exclude the lower endpoint.
        #[arg(long)]
        lower_open: bool,

        /// Include the upper endpoint.
        #[arg(long)]
        upper_closed: bool,
    },

    /// Print a transaction-start statement.
    Begin {
        /// Isolation level, e.g. `repeatable-read`.
        level: IsolationLevel,

        /// Start a read-only transaction.
        #[arg(long)]
        read_only: bool,

        /// Mark the transaction `DEFERRABLE`.
        #[arg(long)]
        deferrable: bool,
    },
}

fn endpoint(value: Option<i32>, include: bool) -> Option<Endpoint> {
    value.map(|v| {
        if include {
            Endpoint::closed(v)
        } else {
            Endpoint::open(v)
        }
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect =
        PostgresDialect::new().with_standard_conforming_strings(cli.standard_conforming_strings);
    debug!(?dialect, "using dialect");

    match cli.command {
        Commands::Literal { text, bare } => {
            let escaped = if bare {
                dialect.escape_literal(&text)
            } else {
                dialect.quote_literal(&text)
            }
            .context("cannot escape literal")?;
            println!("{escaped}");
        }

        Commands::Ident { text } => {
            let escaped = escape_identifier(&text).context("cannot escape identifier")?;
            println!("{escaped}");
        }

        Commands::ParseRange { text, json } => {
            let range = parse_range(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&range)?);
            } else {
                println!("{range}");
            }
        }

        Commands::FormatRange {
            lower,
            upper,
            lower_open,
            upper_closed,
        } => {
            let range = if lower.is_none() && upper.is_none() {
                None
            } else {
                Some(IntRange::new(
                    endpoint(lower, !lower_open),
                    endpoint(upper, upper_closed),
                ))
            };
            println!("{}", format_range(range.as_ref()));
        }

        Commands::Begin {
            level,
            read_only,
            deferrable: is_deferrable,
        } => {
            let statement = |w: &mut SqlWriter| -> oxide_pgwriter::Result<()> {
                if read_only {
                    w.write(&begin_read_only(level))?;
                } else {
                    w.write(&begin(level))?;
                }
                if is_deferrable {
                    w.write(&deferrable(true))?;
                }
                Ok(())
            };
            println!("{}", statement.to_sql_with(dialect)?);
        }
    }

    Ok(())
}

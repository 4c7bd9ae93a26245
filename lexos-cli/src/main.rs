#![warn(clippy::all, clippy::pedantic, clippy::perf, clippy::style)]
#![allow(clippy::as_conversions)]

use std::process;

use lexos::{browser, browser::Session, Isbn};

use clap::{CommandFactory, Parser};
use log::{info, trace};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let cli = Cli::parse();
    setup_errlog(cli.verbose as usize)?;

    if cli.install {
        browser::install()?;
    }

    let Some(raw_isbn) = cli.isbn else {
        // Bare `lexos --install` is a complete run on its own.
        if !cli.install {
            Cli::command().print_help()?;
            println!();
        }
        return Ok(());
    };

    let Ok(isbn) = raw_isbn.parse::<Isbn>() else {
        trace!("'{raw_isbn}' failed checksum validation");
        println!("Invalid ISBN!");
        process::exit(1);
    };

    info!("Starting browser");
    let session = Session::launch()?;
    let report = lexos::lookup(&session, &isbn)?;

    println!("{}", report.render(cli.raw, cli.ln));
    Ok(())
}

fn setup_errlog(verbosity: usize) -> eyre::Result<()> {
    // Errors and warnings always show; each -v adds a level, so a single
    // -v enables the progress (info) messages.
    stderrlog::new().verbosity(verbosity + 1).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "lexos")]
#[clap(about = "Look up the Lexile level, Atos (AR) level, and AR points of a book by its ISBN")]
#[clap(version)]
struct Cli {
    /// The ISBN-10 or ISBN-13 of the book, hyphens allowed
    isbn: Option<String>,

    /// Print the raw numbers without labels, in the order: Lexile level,
    /// Atos level, AR points, with -1 standing in for a missing metric
    #[clap(long)]
    raw: bool,

    /// Separate the outputs with newlines instead of inline separators
    #[clap(long)]
    ln: bool,

    /// Download the managed browser build needed to run the lookups
    ///
    /// Required once before the first lookup on machines without a system
    /// Chromium; may be combined with an ISBN to install and then look up.
    #[clap(long)]
    install: bool,

    /// How chatty the program is when performing the lookup
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

use clap::Parser;
use nextfire::{ResolveError, Skip, Tab};
use std::fs;
use std::io::Read;
use std::process;

#[derive(Parser)]
#[command(
    name = "nextfire",
    about = "Resolve when each job in a cron table next fires",
    version
)]
struct Cli {
    /// Path to the job table, or '-' to read stdin
    tab: String,

    /// Reference time as H:M (defaults to the current local time)
    time: Option<String>,

    /// Echo the loaded table and the canonical reference time
    #[arg(long)]
    show_tab: bool,

    /// Output resolved jobs as JSON
    #[arg(long)]
    json: bool,

    /// Validate the table without printing resolved jobs
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let text = match read_tab(&cli.tab) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", cli.tab);
            process::exit(1);
        }
    };

    let tab = Tab::parse(&text);
    for bad in &tab.malformed {
        eprintln!(
            "warning: line {}: expected 'minute hour task', got '{}'",
            bad.line, bad.text
        );
    }
    let had_malformed = !tab.malformed.is_empty();

    if cli.show_tab {
        for entry in &tab.entries {
            println!("{entry}");
        }
    }

    let reference = cli.time.unwrap_or_else(local_time);

    let resolution = match tab.resolve(&reference) {
        Ok(resolution) => resolution,
        Err(ResolveError::Empty { skipped }) => {
            for skip in &skipped {
                warn_skip(skip);
            }
            eprintln!("no jobs resolved");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    for skip in &resolution.skipped {
        warn_skip(skip);
    }

    if cli.check {
        if had_malformed || !resolution.skipped.is_empty() {
            process::exit(1);
        }
        println!("\u{2713} {} jobs valid", resolution.fired.len());
        process::exit(0);
    }

    if cli.show_tab {
        println!("reference time {}", resolution.reference);
    }

    if cli.json {
        println!("{}", serde_json::to_string(&resolution.fired).unwrap());
    } else {
        for fire in &resolution.fired {
            println!("{fire}");
        }
    }
}

/// Read the job table from a file, or from stdin when the path is '-'.
fn read_tab(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

/// The current local wall-clock time as an unpadded `H:M` string.
fn local_time() -> String {
    let now = jiff::Zoned::now().datetime();
    format!("{}:{}", now.hour(), now.minute())
}

fn warn_skip(skip: &Skip) {
    eprintln!("warning: skipping job '{}': {}", skip.entry.task, skip.error);
}

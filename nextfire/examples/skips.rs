//! What happens to records that fail field validation.
//!
//! Run with: cargo run --example skips

use nextfire::{ResolveError, Tab};

fn main() {
    let tab = Tab::parse("0 30 too-high\nx 9 not-numeric\n* 9 fine\n");

    match tab.resolve("16:10") {
        Ok(resolution) => {
            for skip in &resolution.skipped {
                eprintln!("dropped #{} '{}': {}", skip.index, skip.entry.task, skip.error);
            }
            for fire in &resolution.fired {
                println!("{fire}");
            }
        }
        Err(ResolveError::Empty { skipped }) => {
            eprintln!("nothing resolved ({} records dropped)", skipped.len());
        }
        Err(err) => eprintln!("{}", err.display_rich()),
    }
}

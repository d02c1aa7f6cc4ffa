//! Basic usage: load a job table, resolve it, print the firing times.
//!
//! Run with: cargo run --example basic

use nextfire::Tab;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = "\
30 1 /bin/run_me_daily
45 * /bin/run_me_hourly
* * /bin/run_me_every_minute
* 19 /bin/run_me_sixty_times
";

    let tab = Tab::parse(table);
    println!("loaded {} jobs", tab.entries.len());

    let resolution = tab.resolve("16:10")?;
    println!("reference time {}", resolution.reference);
    for fire in &resolution.fired {
        println!("{fire}");
    }

    Ok(())
}

use std::io;
use std::process;

use anyhow::Context;
use env_logger::Env;

use word_tracker::{snapshot, Config, WordTracker};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("{}", word_tracker::config::USAGE);
            process::exit(2);
        },
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {:?}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let tree = snapshot::load(&config.repository)?.unwrap_or_default();
    let mut tracker = WordTracker::from_tree(tree);

    tracker.ingest_file(&config.input)?;

    match &config.output {
        Some(output) => {
            tracker.write_to_file(output, config.format)?;
            println!("All done! output sent to: {}", output.display());
        },
        None => {
            println!("Displaying with the: {} format!", config.format.flag());
            let stdout = io::stdout();
            tracker.write_entries(stdout.lock(), config.format)
                .context("failed to write to stdout")?;
            println!("All done!");
        },
    }

    snapshot::save(&config.repository, tracker.tree())?;
    Ok(())
}

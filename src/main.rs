use colored::Colorize;
use fruit_streams::{Result, Showcase, ShowcaseConfig};
use std::io;
use std::path::PathBuf;

fn load_config() -> Result<ShowcaseConfig> {
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => ShowcaseConfig::load(&path),
        None => {
            log::debug!("No config file given, using built-in fruit basket");
            Ok(ShowcaseConfig::default())
        }
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    Showcase::new(&config).run(&mut io::stdout())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

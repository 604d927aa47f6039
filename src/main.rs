#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod assemble;
mod config;
mod date;
mod error;
mod fetch;
mod menu;
mod normalize;
mod parse;
mod present;

use std::{env, process::ExitCode};

use chrono::{Datelike, Local};

use crate::{
    config::Config,
    error::Error,
    present::{crawl_failure_embed, invalid_date_embed, menu_embed, system_error_embed, MenuEmbed},
};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const USAGE: &str = "usage: cbnu_menu [DATE] [--json]
  DATE  yyyy-mm-dd, yyyymmdd, mm-dd or mmdd (default: today)";

#[derive(Debug, Default)]
struct Args {
    date: Option<String>,
    json: bool,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Option<Self> {
        let mut out = Self::default();
        for arg in args {
            match arg.as_str() {
                "--json" => out.json = true,
                "-h" | "--help" => return None,
                _ if out.date.is_none() => out.date = Some(arg),
                _ => return None,
            }
        }
        Some(out)
    }
}

async fn run(args: &Args) -> Result<MenuEmbed> {
    let config = Config::from_env()?;
    let today = Local::now().date_naive();
    let target = match args.date.as_deref().map(str::trim) {
        Some(input) if !input.is_empty() => date::parse(input, today.year())?,
        _ => today,
    };
    let result = fetch::fetch_menu(&config, target, today).await?;
    if !result.has_menu() {
        log::info!("no menu published for {target}");
    }
    Ok(menu_embed(&result))
}

fn print(embed: &MenuEmbed, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(embed)?);
    } else {
        println!("{}", embed.to_text());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let Some(args) = Args::parse(env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let (embed, code) = match run(&args).await {
        Ok(embed) => (embed, ExitCode::SUCCESS),
        Err(Error::Date(e)) => (invalid_date_embed(&e), ExitCode::from(1)),
        Err(Error::Crawl(e)) => {
            if e.is_timeout() {
                log::warn!("menu page {} did not render in time", e.url());
            }
            log::error!("crawl failed: {}", e.kind());
            (crawl_failure_embed(&e), ExitCode::from(3))
        }
        Err(e) => {
            log::error!("{e}");
            (system_error_embed(&e), ExitCode::from(4))
        }
    };
    if let Err(e) = print(&embed, args.json) {
        log::error!("failed to print reply: {e}");
        return ExitCode::FAILURE;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Option<Args> {
        Args::parse(list.iter().map(ToString::to_string))
    }

    #[test]
    fn test_args() {
        let parsed = args(&["0528", "--json"]).unwrap();
        assert_eq!(parsed.date.as_deref(), Some("0528"));
        assert!(parsed.json);

        let parsed = args(&[]).unwrap();
        assert!(parsed.date.is_none());
        assert!(!parsed.json);

        assert!(args(&["0528", "0529"]).is_none());
        assert!(args(&["--help"]).is_none());
    }
}

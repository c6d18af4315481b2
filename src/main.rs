use anyhow::Result;
use clap::Parser;
use expected_templates::cli::{Cli, Command};
use expected_templates::commands::check::{self, CheckArgs};
use expected_templates::commands::list::{self, ListArgs};
use expected_templates::commands::{self, path, show};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let (config, source) = commands::load_source(cli.templates_dir)?;

    match cli.command {
        Command::List { format } => {
            list::execute(ListArgs { source, format })?;
        }
        Command::Check {
            keep_going,
            no_keep_going,
            format,
        } => {
            check::execute(CheckArgs {
                source,
                keep_going: check::effective_keep_going(
                    keep_going,
                    no_keep_going,
                    config.check.keep_going,
                ),
                format,
            })?;
        }
        Command::Show { template } => {
            show::execute(template, &source)?;
        }
        Command::Path { template } => {
            path::execute(template, &source)?;
        }
    }

    Ok(())
}

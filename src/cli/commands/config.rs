use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let content = fs::read_to_string(&cfg.path)?;
            println!("{}", content);
        }

        if *check {
            let report = cfg.check();
            if report.is_clean() {
                success(format!("{}: all datasets configured", cfg.path.display()));
            }
            for d in &report.missing {
                warning(format!("Dataset '{d}' is not configured"));
            }
            for key in &report.unknown {
                warning(format!("Unknown dataset '{key}' will be ignored"));
            }
        }

        if !*print_config && !*check {
            warning("Nothing to do: use --print or --check");
        }
    }
    Ok(())
}

use crate::conf::{ConfigError, ValidationReport, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(validated) => {
            let cfg = &validated.config;

            if json {
                println!("{}", validated.validation.render_json()?);
                return Ok(());
            }

            println!("✔ Config loaded successfully");
            println!("✔ key id width {}", cfg.display.key_id_width);
            println!("✔ {}s stats window", cfg.stats.window_seconds);
            println!("✔ source: {}", cfg.source.spec().describe());

            if validated.validation.has_violations() {
                println!();
                print_report(&validated.validation, plain);
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain, json);
            std::process::exit(1);
        }
    }
}

fn print_report(report: &ValidationReport, plain: bool) {
    if plain {
        eprint!("{}", report.render_plain());
    } else {
        eprint!("{}", report.render_pretty());
    }
}

fn print_config_error(err: ConfigError, plain: bool, json: bool) {
    let hint = config_error_hint(&err);

    match &err {
        ConfigError::Validation { report } if json => match report.render_json() {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("{e}"),
        },
        ConfigError::Validation { report } => print_report(report, plain),
        _ => eprintln!("{err}"),
    }

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a default config with:\n\
             \n\
             keywatch config init",
        ),

        ConfigError::Parse { .. } => Some(
            "The config file must be HCL. Every block is optional.\n\
             \n\
             Example:\n\
             \n\
             display {\n\
             \x20 key_id_width = 16\n\
             }",
        ),

        ConfigError::Validation { .. } => None,
    }
}

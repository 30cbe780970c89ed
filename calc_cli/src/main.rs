//! # Tally CLI Application
//!
//! Terminal front-end for the calculator and unit converter.
//!
//! ```text
//! calc_cli keys 2.5 + 1.5 =
//! calc_cli convert -c temperature --from C --to F 100
//! calc_cli units
//! calc_cli repl
//! ```

mod clipboard;
mod output;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use calc_core::commands::parse_key_sequence;
use calc_core::settings::{self, WidgetSettings};
use calc_core::units;
use calc_core::{CalcError, CalcResult, Calculator, ConverterCommand};

use output::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Calculator and unit converter", long_about = None)]
struct Cli {
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// Load preferences from a settings file
    #[arg(long = "settings", value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a calculator key sequence (e.g. `2.5 + 1.5 =`)
    Keys {
        /// Keys: digits, '.', + - * /, =, %, clear, backspace
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Convert a value between two units
    Convert {
        /// Value to convert (',' is accepted as decimal separator)
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Unit category (defaults to the settings' default category)
        #[arg(short, long)]
        category: Option<String>,

        /// Source unit symbol (defaults to the category's first unit)
        #[arg(long)]
        from: Option<String>,

        /// Target unit symbol (defaults to the category's second unit)
        #[arg(long)]
        to: Option<String>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List categories, or the units of one category
    Units {
        /// Category to list
        category: Option<String>,
    },

    /// Interactive prompt
    Repl,

    /// Print the effective settings
    Settings,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let mode = OutputMode::from_flag(cli.json);
    let settings = settings::load_or_default(cli.settings.as_deref());

    match run(cli.command, &settings, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Commands, settings: &WidgetSettings, mode: OutputMode) -> CalcResult<()> {
    match command {
        Commands::Keys { keys } => {
            let mut calculator = Calculator::new();
            let mut view = calculator.view();
            for command in parse_key_sequence(keys.iter().map(String::as_str))? {
                view = calculator.apply(command);
            }
            output::print_calculator(&view, mode);
        }
        Commands::Convert {
            value,
            category,
            from,
            to,
            copy,
        } => {
            let mut converter = settings.converter()?;
            if let Some(category) = category {
                converter.apply(ConverterCommand::SetCategory(category))?;
            }
            if let Some(from) = from {
                converter.apply(ConverterCommand::SetFromUnit(from))?;
            }
            if let Some(to) = to {
                converter.apply(ConverterCommand::SetToUnit(to))?;
            }
            converter.apply(ConverterCommand::SetInput(value))?;
            let view = converter.apply(ConverterCommand::Convert)?;
            output::print_converter(&view, mode);

            if copy {
                clipboard::copy_with_notice(&view.result_text);
            }
        }
        Commands::Units { category } => match category {
            Some(name) => output::print_category(units::require_category(&name)?, mode),
            None => output::print_categories(units::categories(), mode),
        },
        Commands::Repl => {
            let session = repl::Session::new(settings)?;
            repl::run(session, mode).map_err(|e| CalcError::Internal {
                message: format!("terminal I/O failed: {}", e),
            })?;
        }
        Commands::Settings => output::print_json(settings),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "calc_cli", "--json", "convert", "-c", "temperature", "--from", "C", "--to", "F", "-40",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Convert { value, category, .. } => {
                assert_eq!(value, "-40");
                assert_eq!(category.as_deref(), Some("temperature"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_keys_with_operators() {
        let cli = Cli::try_parse_from(["calc_cli", "keys", "9", "-", "4", "="]).unwrap();
        match cli.command {
            Commands::Keys { keys } => assert_eq!(keys, vec!["9", "-", "4", "="]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_settings_subcommand_is_read_only() {
        let cli = Cli::try_parse_from(["calc_cli", "settings"]).unwrap();
        assert!(matches!(cli.command, Commands::Settings));
        assert!(Cli::try_parse_from(["calc_cli", "settings", "--write", "out.json"]).is_err());
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = run(
            Commands::Units {
                category: Some("volume".to_string()),
            },
            &WidgetSettings::default(),
            OutputMode::Text,
        )
        .unwrap_err();
        assert_eq!(err, CalcError::category_not_found("volume"));
    }
}

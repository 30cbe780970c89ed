//! Interactive prompt.
//!
//! Plain lines are calculator keys (`12 + 3 =`); lines starting with `:`
//! drive the converter. Both widgets live for the whole session.

use std::io::{self, BufRead, Write};

use calc_core::commands::parse_key_sequence;
use calc_core::units;
use calc_core::{
    CalcResult, Calculator, CalculatorView, Converter, ConverterCommand, ConverterView,
    WidgetSettings,
};

use crate::clipboard::copy_with_notice;
use crate::output::{self, OutputMode};

const HELP: &str = "\
Calculator: type keys separated by spaces, e.g. `2.5 + 1.5 =`
  digits and .   + - * /   =   %   c (clear)   bs (backspace)
Converter:
  :category NAME   :from SYMBOL   :to SYMBOL   :input TEXT
  :convert   :auto   :copy   :units   :show
Other:
  :help   :quit";

/// What a line of input produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Calculator(CalculatorView),
    Converter(ConverterView),
    /// Units of the named category
    Units(&'static str),
    Copy(String),
    Help,
    Quit,
    Nothing,
}

/// Calculator and converter owned by one prompt session.
pub struct Session {
    calculator: Calculator,
    converter: Converter,
}

impl Session {
    pub fn new(settings: &WidgetSettings) -> CalcResult<Self> {
        Ok(Session {
            calculator: Calculator::new(),
            converter: settings.converter()?,
        })
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> CalcResult<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Nothing);
        }

        if let Some(meta) = line.strip_prefix(':') {
            return self.handle_meta(meta);
        }

        let commands = parse_key_sequence(line.split_whitespace())?;
        let mut view = self.calculator.view();
        for command in commands {
            view = self.calculator.apply(command);
        }
        Ok(Reply::Calculator(view))
    }

    fn handle_meta(&mut self, meta: &str) -> CalcResult<Reply> {
        let (name, arg) = match meta.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (meta, ""),
        };

        let command = match name {
            "q" | "quit" | "exit" => return Ok(Reply::Quit),
            "h" | "help" => return Ok(Reply::Help),
            "units" => return Ok(Reply::Units(self.converter.category().name())),
            "show" => return Ok(Reply::Converter(self.converter.view())),
            "copy" => return Ok(Reply::Copy(self.converter.result().text().to_string())),
            "category" | "cat" => ConverterCommand::SetCategory(arg.to_string()),
            "from" => ConverterCommand::SetFromUnit(arg.to_string()),
            "to" => ConverterCommand::SetToUnit(arg.to_string()),
            "input" | "in" => ConverterCommand::SetInput(arg.to_string()),
            "convert" => ConverterCommand::Convert,
            "auto" => ConverterCommand::ToggleAuto,
            other => {
                return Err(calc_core::CalcError::invalid_input(
                    "command",
                    format!(":{}", other),
                    "unknown command, try :help",
                ))
            }
        };

        Ok(Reply::Converter(self.converter.apply(command)?))
    }
}

/// Run the prompt loop until EOF or `:quit`.
pub fn run(mut session: Session, mode: OutputMode) -> io::Result<()> {
    println!("Tally - calculator & unit converter");
    println!("Categories: {}", units::category_names().join(", "));
    println!("Type :help for commands.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Help) => println!("{}", HELP),
            Ok(Reply::Calculator(view)) => output::print_calculator(&view, mode),
            Ok(Reply::Converter(view)) => output::print_converter(&view, mode),
            Ok(Reply::Units(name)) => {
                if let Some(category) = units::category(name) {
                    output::print_category(category, mode);
                }
            }
            Ok(Reply::Copy(text)) => copy_with_notice(&text),
            Err(e) => output::print_error(&e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::ConversionOutput;

    fn session() -> Session {
        Session::new(&WidgetSettings::default()).unwrap()
    }

    #[test]
    fn test_calculator_lines_share_state() {
        let mut session = session();
        session.handle_line("2.5 +").unwrap();
        let reply = session.handle_line("1.5 =").unwrap();
        match reply {
            Reply::Calculator(view) => assert_eq!(view.display, "4"),
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_converter_meta_commands() {
        let mut session = session();
        session.handle_line(":category temperature").unwrap();
        session.handle_line(":from C").unwrap();
        session.handle_line(":to F").unwrap();
        let reply = session.handle_line(":input 100").unwrap();
        match reply {
            Reply::Converter(view) => {
                assert_eq!(view.result, ConversionOutput::Value("212 F".to_string()))
            }
            other => panic!("unexpected reply {:?}", other),
        }

        assert_eq!(
            session.handle_line(":copy").unwrap(),
            Reply::Copy("212 F".to_string())
        );
    }

    #[test]
    fn test_empty_input_clears_result() {
        let mut session = session();
        session.handle_line(":input 5").unwrap();
        match session.handle_line(":input").unwrap() {
            Reply::Converter(view) => assert_eq!(view.result, ConversionOutput::Empty),
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_errors_and_control() {
        let mut session = session();
        assert!(session.handle_line(":from lb").is_err());
        assert!(session.handle_line(":frobnicate").is_err());
        assert!(session.handle_line("2 ^ 3").is_err());
        assert_eq!(session.handle_line("   ").unwrap(), Reply::Nothing);
        assert_eq!(session.handle_line(":help").unwrap(), Reply::Help);
        assert_eq!(session.handle_line(":q").unwrap(), Reply::Quit);
    }
}

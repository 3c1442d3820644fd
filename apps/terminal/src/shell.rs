//! # Shell
//!
//! Turns input lines into commands and command results into output.
//!
//! ## Command Reference
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input              Command                  Screen equivalent          │
//! │  ─────              ───────                  ─────────────────          │
//! │  bill 84.20         set_bill("84.20")        type in "Enter bill"       │
//! │  bill               set_bill("")             clear the bill field       │
//! │  split +            increment_split()        press [+]                  │
//! │  split -            decrement_split()        press [-]                  │
//! │  split 4            set_split(4)             -                          │
//! │  tip 0.18           set_tip(0.18)            drag the slider            │
//! │  show               get_bill()               -                          │
//! │  json               get_bill() as JSON       -                          │
//! │  config             get_config()             -                          │
//! │  reset              reset_bill()             -                          │
//! │  help / quit                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::commands::{bill, config};
use crate::error::ApiError;
use crate::state::{BillView, ConfigState, FormState, OutputMode};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    SetBill(String),
    IncrementSplit,
    DecrementSplit,
    SetSplit(i64),
    SetTip(f32),
    Show,
    ShowJson,
    Config,
    Reset,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// ## Errors
    /// `UNKNOWN_COMMAND` for unrecognized words, `VALIDATION_ERROR` for a
    /// known command with an unreadable argument.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("bill", text) => ShellCommand::SetBill(text.to_string()),
            ("split", "+") => ShellCommand::IncrementSplit,
            ("split", "-") => ShellCommand::DecrementSplit,
            ("split", count) => ShellCommand::SetSplit(count.parse().map_err(|_| {
                ApiError::validation("split expects '+', '-' or a whole number")
            })?),
            ("tip", position) => ShellCommand::SetTip(position.parse().map_err(|_| {
                ApiError::validation("tip expects a slider position between 0 and 1")
            })?),
            ("show", "") => ShellCommand::Show,
            ("json", "") => ShellCommand::ShowJson,
            ("config", "") => ShellCommand::Config,
            ("reset", "") => ShellCommand::Reset,
            ("help", "") | ("?", "") => ShellCommand::Help,
            ("quit", "") | ("exit", "") => ShellCommand::Quit,
            _ => return Err(ApiError::unknown_command(line)),
        };

        Ok(Some(command))
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellOutput {
    View(BillView),
    Json(BillView),
    Config(ConfigState),
    Help,
    Quit,
}

/// Dispatches parsed commands against the app state.
#[derive(Debug, Clone)]
pub struct Shell {
    form: FormState,
    config: ConfigState,
}

impl Shell {
    pub fn new(form: FormState, config: ConfigState) -> Self {
        Shell { form, config }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Runs one command.
    pub fn execute(&self, command: ShellCommand) -> Result<ShellOutput, ApiError> {
        let output = match command {
            ShellCommand::SetBill(text) => ShellOutput::View(bill::set_bill(&self.form, &text)),
            ShellCommand::IncrementSplit => ShellOutput::View(bill::increment_split(&self.form)),
            ShellCommand::DecrementSplit => ShellOutput::View(bill::decrement_split(&self.form)),
            ShellCommand::SetSplit(count) => ShellOutput::View(bill::set_split(&self.form, count)?),
            ShellCommand::SetTip(position) => {
                ShellOutput::View(bill::set_tip(&self.form, position)?)
            }
            ShellCommand::Show => ShellOutput::View(bill::get_bill(&self.form)),
            ShellCommand::ShowJson => ShellOutput::Json(bill::get_bill(&self.form)),
            ShellCommand::Config => ShellOutput::Config(config::get_config(&self.config)),
            ShellCommand::Reset => ShellOutput::View(bill::reset_bill(&self.form)),
            ShellCommand::Help => ShellOutput::Help,
            ShellCommand::Quit => ShellOutput::Quit,
        };
        Ok(output)
    }

    /// Parses and runs one line, returning the text to print.
    ///
    /// `Ok(None)` means the session should end.
    pub fn handle_line(&self, line: &str) -> Result<Option<String>, ApiError> {
        let Some(command) = ShellCommand::parse(line)? else {
            return Ok(Some(String::new()));
        };

        match self.execute(command)? {
            ShellOutput::Quit => Ok(None),
            output => render(&output, self.config.output_mode).map(Some),
        }
    }
}

/// Renders a command result for the terminal.
pub fn render(output: &ShellOutput, mode: OutputMode) -> Result<String, ApiError> {
    let text = match (output, mode) {
        (ShellOutput::View(view), OutputMode::Text) => render_view(view),
        (ShellOutput::View(view), OutputMode::Json) | (ShellOutput::Json(view), _) => {
            serde_json::to_string(view)?
        }
        (ShellOutput::Config(config), _) => serde_json::to_string_pretty(config)?,
        (ShellOutput::Help, _) => HELP.to_string(),
        (ShellOutput::Quit, _) => String::new(),
    };
    Ok(text)
}

/// Screen layout: header first, the rest only once the bill is valid.
fn render_view(view: &BillView) -> String {
    let mut lines = vec![
        "Total Per Person".to_string(),
        view.total_per_person_display.clone(),
    ];

    if view.is_valid {
        lines.push(format!("Bill   {}", view.bill_text.trim()));
        lines.push(format!("Split  {}", view.split_count));
        lines.push(format!(
            "Tip    {}",
            view.tip_display.as_deref().unwrap_or("$0.00")
        ));
        lines.push(format!("       {}%", view.tip_percentage));
    } else {
        lines.push("Enter bill".to_string());
    }

    lines.join("\n")
}

pub const HELP: &str = "\
commands:
  bill <amount>   set the bill (blank clears it)
  split + | -     add or remove a person
  split <n>       set the number of people
  tip <0.0-1.0>   move the tip slider
  show            show the bill
  json            show the bill as JSON
  config          show the configuration
  reset           start over
  quit            leave";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn shell() -> Shell {
        Shell::new(FormState::default(), ConfigState::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("bill 84.20").unwrap(),
            Some(ShellCommand::SetBill("84.20".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("bill").unwrap(),
            Some(ShellCommand::SetBill(String::new()))
        );
        assert_eq!(
            ShellCommand::parse("  SPLIT +").unwrap(),
            Some(ShellCommand::IncrementSplit)
        );
        assert_eq!(
            ShellCommand::parse("split -").unwrap(),
            Some(ShellCommand::DecrementSplit)
        );
        assert_eq!(
            ShellCommand::parse("split 4").unwrap(),
            Some(ShellCommand::SetSplit(4))
        );
        assert_eq!(
            ShellCommand::parse("tip 0.25").unwrap(),
            Some(ShellCommand::SetTip(0.25))
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        let err = ShellCommand::parse("dance").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);

        let err = ShellCommand::parse("split many").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ShellCommand::parse("tip lots").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ShellCommand::parse("show me").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_render_empty_bill_shows_header_only() {
        let text = shell().handle_line("show").unwrap().unwrap();
        assert_eq!(text, "Total Per Person\n$0.00\nEnter bill");
    }

    #[test]
    fn test_render_valid_bill() {
        let shell = shell();
        shell.handle_line("bill 50").unwrap();
        shell.handle_line("tip 0.2").unwrap();
        shell.handle_line("split 3").unwrap();

        let text = shell.handle_line("show").unwrap().unwrap();
        assert_eq!(
            text,
            "Total Per Person\n$20.00\nBill   50\nSplit  3\nTip    $10.00\n       20%"
        );
    }

    #[test]
    fn test_json_output() {
        let shell = shell();
        shell.handle_line("bill 100").unwrap();
        shell.handle_line("split +").unwrap();

        let text = shell.handle_line("json").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["splitCount"], 2);
        assert_eq!(json["tipAmount"], 10.0);
        assert_eq!(json["totalPerPerson"], 55.0);
        assert_eq!(json["totalPerPersonDisplay"], "$55.00");
    }

    #[test]
    fn test_json_mode_renders_every_view_as_json() {
        let config = ConfigState {
            output_mode: OutputMode::Json,
            ..ConfigState::default()
        };
        let shell = Shell::new(FormState::default(), config);
        let text = shell.handle_line("bill abc").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["isValid"], false);
        assert!(json["tipAmount"].is_null());
        assert!(json["totalPerPerson"].is_null());
        assert_eq!(json["totalPerPersonDisplay"], "$0.00");
    }

    #[test]
    fn test_huge_bill_waits_for_valid_input() {
        let shell = shell();
        let text = shell.handle_line("bill 1e308").unwrap().unwrap();
        assert_eq!(text, "Total Per Person\n$0.00\nEnter bill");

        shell.handle_line("split +").unwrap();
        let text = shell.handle_line("json").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["billText"], "1e308");
        assert!(json["tipAmount"].is_null());
        assert!(json["totalPerPerson"].is_null());
    }

    #[test]
    fn test_quit_ends_session() {
        assert_eq!(shell().handle_line("quit").unwrap(), None);
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        assert_eq!(shell().handle_line("").unwrap(), Some(String::new()));
    }
}

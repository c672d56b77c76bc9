use std::str::FromStr;

use derive_more::Display;

use crate::model::employee::Field;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Clear(Field),
    Submit,
    Reset,
    Show,
    Fields,
    Departments,
    Help,
    Quit,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    #[display(fmt = "Unknown command `{}`. Type `help` to list commands.", _0)]
    UnknownCommand(String),
    #[display(fmt = "Unknown field `{}`. Type `fields` to list them.", _0)]
    UnknownField(String),
    #[display(fmt = "Usage: {}", _0)]
    MissingArgument(&'static str),
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  set <field> <value>   change a field (value may contain spaces)
  clear <field>         empty a field
  submit                validate and add the employee
  reset                 empty every field
  show                  print the form
  fields                list field keys
  departments           list department choices
  help                  print this list
  quit                  leave";

fn parse_field(key: &str) -> Result<Field, CommandError> {
    Field::from_str(key).map_err(|_| CommandError::UnknownField(key.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return Ok(Command::Blank);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        match word.to_ascii_lowercase().as_str() {
            "set" => {
                let rest = rest
                    .map(str::trim_start)
                    .filter(|r| !r.is_empty())
                    .ok_or(CommandError::MissingArgument("set <field> <value>"))?;
                // The value keeps inner and trailing spaces: it is raw input.
                let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::Set(parse_field(key)?, value.to_string()))
            }
            "clear" => {
                let key = rest
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(CommandError::MissingArgument("clear <field>"))?;
                Ok(Command::Clear(parse_field(key)?))
            }
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "fields" => Ok(Command::Fields),
            "departments" => Ok(Command::Departments),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::UnknownCommand(word.to_string())),
        }
    }
}

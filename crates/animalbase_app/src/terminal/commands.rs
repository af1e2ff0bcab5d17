use animalbase_core::{HeaderDirections, Msg, SettingsParseError, SortDirection, SortKey};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  filter <type|all>                          show one type or everything
  sort <name|desc|type|age|star|winner> [asc|desc]
                                             sort by a column; each column flips its own
                                             direction on every sort without one
  star <name>                                toggle the favourite star
  winner <name>                              toggle winner status
  help                                       show this text
  quit                                       leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Sort {
        key: SortKey,
        direction: Option<SortDirection>,
    },
    Star(String),
    Winner(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Settings(#[from] SettingsParseError),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let verb = verb.to_ascii_lowercase();
        match verb.as_str() {
            "filter" => Ok(Command::Filter(required(words.next(), "filter")?)),
            "sort" => {
                let key = required(words.next(), "sort")?.parse()?;
                let direction = words.next().map(str::parse).transpose()?;
                Ok(Command::Sort { key, direction })
            }
            "star" => Ok(Command::Star(required(words.next(), "star")?)),
            "winner" => Ok(Command::Winner(required(words.next(), "winner")?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }

    /// Intent for this command, or `None` for commands the adapter handles itself.
    ///
    /// A sort without a direction acts like clicking that column's header.
    pub fn to_msg(&self, headers: &mut HeaderDirections) -> Option<Msg> {
        match self {
            Command::Filter(filter) => Some(Msg::FilterChanged(filter.clone())),
            Command::Sort { key, direction } => {
                let direction = match direction {
                    Some(direction) => {
                        headers.set(*key, *direction);
                        *direction
                    }
                    None => headers.click(*key),
                };
                Some(Msg::SortChanged {
                    key: *key,
                    direction,
                })
            }
            Command::Star(name) => Some(Msg::StarToggled(name.clone())),
            Command::Winner(name) => Some(Msg::WinnerToggled(name.clone())),
            Command::Help | Command::Quit => None,
        }
    }
}

fn required(word: Option<&str>, verb: &'static str) -> Result<String, CommandError> {
    word.map(ToOwned::to_owned)
        .ok_or(CommandError::MissingArgument(verb))
}

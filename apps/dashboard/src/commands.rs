//! Line commands typed into the interactive dashboard.

use orders_table::{PageSize, ParseError, RowField};
use shared::domain::OrderNumber;
use thiserror::Error;

use crate::dashboard::Tab;

pub const HELP: &str = "\
commands:
  sort <field>        sort by field; repeat to flip direction
                      fields: orderNumber orderedDate status shippedDate customerAddress orderedValue
  page <n>            jump to page n (1-based)
  next | prev         move one page
  size <5|10|25>      rows per page
  select <order#>     toggle selection of one order
  all on|off          select or clear every order
  tab all|shipped     switch tab
  refresh             fetch orders again
  help                show this text
  quit                leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Sort(RowField),
    /// Zero-based page index.
    Page(usize),
    NextPage,
    PreviousPage,
    PageSize(PageSize),
    ToggleRow(OrderNumber),
    SelectAll(bool),
    Tab(Tab),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid argument '{value}' for '{command}'")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub fn parse_command(line: &str) -> Result<ViewCommand, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err(CommandError::Empty);
    };
    let arg = words.next();

    let command = match name.to_ascii_lowercase().as_str() {
        "sort" => ViewCommand::Sort(require(arg, "sort", "a field name")?.parse()?),
        "page" => {
            let raw = require(arg, "page", "a page number")?;
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => ViewCommand::Page(n - 1),
                _ => return Err(invalid("page", raw)),
            }
        }
        "next" | "n" => ViewCommand::NextPage,
        "prev" | "p" => ViewCommand::PreviousPage,
        "size" => ViewCommand::PageSize(require(arg, "size", "5, 10 or 25")?.parse()?),
        "select" => {
            let raw = require(arg, "select", "an order number")?;
            let number = raw.parse::<i64>().map_err(|_| invalid("select", raw))?;
            ViewCommand::ToggleRow(OrderNumber(number))
        }
        "all" => match require(arg, "all", "on or off")?.to_ascii_lowercase().as_str() {
            "on" => ViewCommand::SelectAll(true),
            "off" => ViewCommand::SelectAll(false),
            other => return Err(invalid("all", other)),
        },
        "tab" => match require(arg, "tab", "all or shipped")?.to_ascii_lowercase().as_str() {
            "all" => ViewCommand::Tab(Tab::All),
            "shipped" => ViewCommand::Tab(Tab::Shipped),
            other => return Err(invalid("tab", other)),
        },
        "refresh" | "r" => ViewCommand::Refresh,
        "help" | "?" => ViewCommand::Help,
        "quit" | "exit" | "q" => ViewCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn require<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;

use crate::model::{DraftField, ProductId};
use std::str::FromStr;

use super::ConsoleError;

pub const HELP: &str = "\
Commands:
  list                      show every product matching the current search
  search [QUERY]            filter the table live; no query clears the filter
  set FIELD=VALUE...        stage inputs (id, name, description, price, quantity)
  form                      show the staged inputs
  edit ID                   load a product into the form for editing
  save                      add the staged product, or update the one being edited
  cancel                    clear the form and leave edit mode
  delete ID                 remove a product after confirmation
  refresh                   reload: drop every change and start from the seed catalog
  help                      show this text
  quit | exit               leave";

/// One line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Set(Vec<(DraftField, String)>),
    Form,
    Edit(ProductId),
    Save,
    Cancel,
    Delete(ProductId),
    Refresh,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    /// Splits the line shell-style, so `set name="Asus Laptop"` keeps its space.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = shlex::split(line).ok_or(ConsoleError::UnbalancedQuotes)?;
        let Some((verb, args)) = words.split_first() else {
            return Err(ConsoleError::Usage("help"));
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => no_args(args, Command::List, "list")?,
            "search" | "find" => Command::Search(args.join(" ")),
            "set" => {
                if args.is_empty() {
                    return Err(ConsoleError::Usage("set FIELD=VALUE..."));
                }
                Command::Set(args.iter().map(|arg| assignment(arg)).collect::<Result<_, _>>()?)
            }
            "form" | "show" => no_args(args, Command::Form, "form")?,
            "edit" => Command::Edit(one_id(args, "edit ID")?),
            "save" => no_args(args, Command::Save, "save")?,
            "cancel" | "clear" => no_args(args, Command::Cancel, "cancel")?,
            "delete" | "rm" => Command::Delete(one_id(args, "delete ID")?),
            "refresh" | "reload" => no_args(args, Command::Refresh, "refresh")?,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ConsoleError::UnknownCommand(verb.clone())),
        };
        Ok(command)
    }
}

fn no_args(args: &[String], command: Command, usage: &'static str) -> Result<Command, ConsoleError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ConsoleError::Usage(usage))
    }
}

fn one_id(args: &[String], usage: &'static str) -> Result<ProductId, ConsoleError> {
    match args {
        [id] => id
            .parse()
            .map_err(|_| ConsoleError::InvalidId(id.clone())),
        _ => Err(ConsoleError::Usage(usage)),
    }
}

fn assignment(arg: &str) -> Result<(DraftField, String), ConsoleError> {
    let (field, value) = arg
        .split_once('=')
        .ok_or(ConsoleError::Usage("set FIELD=VALUE..."))?;
    Ok((field.parse()?, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ConsoleError> {
        line.parse()
    }

    #[test]
    fn parses_plain_verbs_case_insensitively() {
        assert_eq!(parse("LIST").unwrap(), Command::List);
        assert_eq!(parse("save").unwrap(), Command::Save);
        assert_eq!(parse("  exit ").unwrap(), Command::Quit);
        assert_eq!(parse("reload").unwrap(), Command::Refresh);
    }

    #[test]
    fn search_joins_its_words() {
        assert_eq!(parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(
            parse("search asus laptop").unwrap(),
            Command::Search("asus laptop".to_string())
        );
    }

    #[test]
    fn set_accepts_quoted_values() {
        assert_eq!(
            parse(r#"set id=6 name="Wireless Mouse" price=19.99"#).unwrap(),
            Command::Set(vec![
                (DraftField::Id, "6".to_string()),
                (DraftField::Name, "Wireless Mouse".to_string()),
                (DraftField::Price, "19.99".to_string()),
            ])
        );
        assert_eq!(
            parse("set description=").unwrap(),
            Command::Set(vec![(DraftField::Description, String::new())])
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(parse("set"), Err(ConsoleError::Usage(_))));
        assert!(matches!(parse("set name"), Err(ConsoleError::Usage(_))));
        assert!(matches!(parse("set colour=red"), Err(ConsoleError::UnknownField(_))));
        assert!(matches!(parse("edit"), Err(ConsoleError::Usage(_))));
        assert!(matches!(parse("delete two"), Err(ConsoleError::InvalidId(_))));
        assert!(matches!(parse("list everything"), Err(ConsoleError::Usage(_))));
        assert!(matches!(parse("set name=\"open"), Err(ConsoleError::UnbalancedQuotes)));
        assert!(matches!(parse("frobnicate"), Err(ConsoleError::UnknownCommand(_))));
    }

    #[test]
    fn ids_are_normalized() {
        assert_eq!(parse("edit 007").unwrap(), Command::Edit(ProductId(7)));
        assert_eq!(parse("delete 2").unwrap(), Command::Delete(ProductId(2)));
    }
}

//! Command parsing and list rendering for the interactive terminal client.

use std::fmt::Write as _;

use todo_core::todo::Category;
use todo_core::types::DbId;

use crate::api::TodoItem;

pub const HELP: &str = "\
Commands:
  list                 show the list
  add <text>           add a task in the selected category
  category <name>      select work, life or study
  toggle <id>          mark done/undone (this session only)
  delete <id>          delete a task (asks for confirmation)
  refresh              reload from the server
  help                 show this help
  quit                 exit";

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Category(Category),
    Toggle(DbId),
    Delete(DbId),
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            // Empty text is passed through; the view decides what to do.
            "add" | "a" => Command::Add(rest.to_string()),
            "category" | "cat" => {
                let category = rest.parse::<Category>().map_err(|e| e.to_string())?;
                Command::Category(category)
            }
            "toggle" | "t" => Command::Toggle(parse_id(rest)?),
            "delete" | "rm" => Command::Delete(parse_id(rest)?),
            "refresh" | "r" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
        };

        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<DbId, String> {
    todo_core::todo::parse_todo_id(raw).map_err(|_| format!("'{raw}' is not a todo id"))
}

/// Render the list the way the terminal client prints it.
pub fn render(todos: &[TodoItem], pending: usize, selected: Category) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "My todos: {pending} left to do (adding to: {selected})");

    if todos.is_empty() {
        out.push_str("  (nothing here yet)\n");
        return out;
    }

    for todo in todos {
        let check = if todo.completed { "[x]" } else { "[ ]" };
        let marker = todo
            .known_category()
            .map(Category::marker)
            .unwrap_or("[?]");
        let _ = writeln!(out, "  {check} #{:<4} {} {marker}", todo.id, todo.title);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: DbId, title: &str, category: &str, completed: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            category: category.to_string(),
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(
            Command::parse("add  Buy milk ").unwrap(),
            Some(Command::Add("Buy milk".into()))
        );
        assert_eq!(
            Command::parse("cat Study").unwrap(),
            Some(Command::Category(Category::Study))
        );
        assert_eq!(Command::parse("toggle 3").unwrap(), Some(Command::Toggle(3)));
        assert_eq!(Command::parse("rm 12").unwrap(), Some(Command::Delete(12)));
        assert_eq!(Command::parse("Q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn add_without_text_is_passed_through() {
        assert_eq!(Command::parse("add").unwrap(), Some(Command::Add(String::new())));
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(Command::parse("delete abc").is_err());
        assert!(Command::parse("toggle").is_err());
        assert!(Command::parse("category chores").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn render_marks_completion_and_category() {
        let todos = vec![
            item(2, "Gym", "life", true),
            item(1, "Report", "work", false),
            item(0, "Legacy", "", false),
        ];

        let out = render(&todos, 2, Category::Work);

        assert!(out.starts_with("My todos: 2 left to do (adding to: work)"));
        assert!(out.contains("[x] #2    Gym [L]"));
        assert!(out.contains("[ ] #1    Report [W]"));
        assert!(out.contains("Legacy [?]"));
    }

    #[test]
    fn render_empty_list() {
        let out = render(&[], 0, Category::Life);
        assert!(out.contains("nothing here yet"));
    }
}

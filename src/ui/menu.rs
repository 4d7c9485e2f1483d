use crate::selector::Selection;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Top-level menu outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Process,
    Exit,
}

/// The two-level operator menu.
///
/// Reads from any `BufRead` and writes prompts to any `Write`, so tests can
/// drive it with in-memory buffers. Invalid input is reported and re-prompted;
/// EOF on the input stream is treated as the exit choice.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows the top-level menu until the operator enters a valid choice.
    pub fn main_choice(&mut self) -> io::Result<MenuChoice> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Select file to process")?;
            writeln!(self.output, "2. Exit the program")?;
            write!(self.output, "Enter a choice 1 or 2: ")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(MenuChoice::Exit),
            };

            match line.trim().parse::<u32>() {
                Ok(1) => return Ok(MenuChoice::Process),
                Ok(2) => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(MenuChoice::Exit);
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Shows the selection sub-menu once.
    ///
    /// An invalid choice is reported and yields `None`, returning control to
    /// the top-level menu. EOF also yields `None`.
    pub fn selection_choice(&mut self) -> io::Result<Option<Selection>> {
        writeln!(self.output)?;
        writeln!(self.output, "Which file do you want to process?")?;
        writeln!(self.output, "Enter 1 to pick the largest file")?;
        writeln!(self.output, "Enter 2 to pick the smallest file")?;
        writeln!(self.output, "Enter 3 to specify the name of a file")?;
        write!(self.output, "Enter a choice from 1 to 3: ")?;
        self.output.flush()?;

        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.trim().parse::<u32>() {
            Ok(1) => Ok(Some(Selection::Largest)),
            Ok(2) => Ok(Some(Selection::Smallest)),
            Ok(3) => self.prompt_for_path(),
            _ => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(None)
            }
        }
    }

    fn prompt_for_path(&mut self) -> io::Result<Option<Selection>> {
        write!(self.output, "Enter the complete file name: ")?;
        self.output.flush()?;

        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(None);
        }

        Ok(Some(Selection::Named(PathBuf::from(trimmed))))
    }

    /// Reads one line; `None` means EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn menu_over(input: &str) -> Menu<Cursor<Vec<u8>>, Vec<u8>> {
        Menu::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_main_choice_process_and_exit() {
        let mut menu = menu_over("1\n");
        assert_eq!(menu.main_choice().unwrap(), MenuChoice::Process);

        let mut menu = menu_over("2\n");
        assert_eq!(menu.main_choice().unwrap(), MenuChoice::Exit);
        let transcript = String::from_utf8(menu.output).unwrap();
        assert!(transcript.contains("Exiting the program."));
    }

    #[test]
    fn test_main_choice_reprompts_on_invalid_input() {
        let mut menu = menu_over("7\nbananas\n1\n");
        assert_eq!(menu.main_choice().unwrap(), MenuChoice::Process);

        let transcript = String::from_utf8(menu.output).unwrap();
        assert_eq!(transcript.matches("Invalid choice").count(), 2);
        assert_eq!(transcript.matches("Enter a choice 1 or 2").count(), 3);
    }

    #[test]
    fn test_main_choice_eof_exits() {
        let mut menu = menu_over("");
        assert_eq!(menu.main_choice().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_selection_choices() {
        let mut menu = menu_over("1\n");
        assert_eq!(menu.selection_choice().unwrap(), Some(Selection::Largest));

        let mut menu = menu_over("2\n");
        assert_eq!(menu.selection_choice().unwrap(), Some(Selection::Smallest));

        let mut menu = menu_over("3\nmovies_sample.csv\n");
        assert_eq!(
            menu.selection_choice().unwrap(),
            Some(Selection::Named(PathBuf::from("movies_sample.csv")))
        );
    }

    #[test]
    fn test_invalid_selection_returns_to_main_menu() {
        let mut menu = menu_over("9\n");
        assert_eq!(menu.selection_choice().unwrap(), None);

        let transcript = String::from_utf8(menu.output).unwrap();
        assert!(transcript.contains("Invalid choice"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut menu = menu_over("3\n\n");
        assert_eq!(menu.selection_choice().unwrap(), None);
    }
}

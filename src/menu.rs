// Menu rendering and console input
use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Store,
    ViewAll,
    View,
    Change,
    Delete,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::Store,
        MenuOption::ViewAll,
        MenuOption::View,
        MenuOption::Change,
        MenuOption::Delete,
        MenuOption::Exit,
    ];

    /// Parse a menu code. Only the exact strings "1" through "6" are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(MenuOption::Store),
            "2" => Some(MenuOption::ViewAll),
            "3" => Some(MenuOption::View),
            "4" => Some(MenuOption::Change),
            "5" => Some(MenuOption::Delete),
            "6" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Store => "1. Store setting",
            MenuOption::ViewAll => "2. View all settings",
            MenuOption::View => "3. View setting",
            MenuOption::Change => "4. Change setting",
            MenuOption::Delete => "5. Delete setting",
            MenuOption::Exit => "6. Exit",
        }
    }
}

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `text` without a newline and read one line of input.
    ///
    /// Only the line terminator is stripped; other whitespace is kept. Bytes that
    /// aren't valid UTF-8 are replaced rather than rejected.
    pub fn prompt(&mut self, text: &str) -> AppResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(AppError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }
}

/// Show the menu and keep asking until a valid option is entered
pub fn choose_option<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<MenuOption> {
    console.say("What do you want to do?\n")?;
    for option in MenuOption::ALL {
        console.say(option.label())?;
    }

    let count = MenuOption::ALL.len();
    let mut answer = console.prompt(&format!("Choose between 1-{}\n", count))?;
    loop {
        if let Some(option) = MenuOption::from_code(&answer) {
            return Ok(option);
        }
        log::debug!("Rejected menu input {:?}", answer);
        answer = console.prompt(&format!(
            "Invalid input, please choose between 1-{}\n",
            count
        ))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_from_code_accepts_menu_range() {
        let parsed: Vec<_> = ["1", "2", "3", "4", "5", "6"]
            .iter()
            .map(|code| MenuOption::from_code(code).unwrap())
            .collect();
        assert_eq!(parsed, MenuOption::ALL.to_vec());
    }

    #[test]
    fn test_from_code_rejects_everything_else() {
        for code in ["", " ", "0", "7", "10", " 1", "1 ", "one", "-1", "1.0", "06"] {
            assert_eq!(MenuOption::from_code(code), None, "accepted {:?}", code);
        }
    }

    #[test]
    fn test_prompt_strips_line_terminator_only() {
        let mut console = console("  spaced  \r\nnext\n");
        assert_eq!(console.prompt("> ").unwrap(), "  spaced  ");
        assert_eq!(console.prompt("> ").unwrap(), "next");
        assert_eq!(output_of(&console), "> > ");
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let mut console = console("tail");
        assert_eq!(console.prompt("").unwrap(), "tail");
    }

    #[test]
    fn test_prompt_on_closed_input() {
        let mut console = console("");
        assert!(matches!(console.prompt(""), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_choose_option_lists_menu() {
        let mut console = console("2\n");

        assert_eq!(choose_option(&mut console).unwrap(), MenuOption::ViewAll);

        let output = output_of(&console);
        assert!(output.starts_with("What do you want to do?\n"));
        for option in MenuOption::ALL {
            assert!(output.contains(option.label()));
        }
        assert!(output.ends_with("Choose between 1-6\n"));
    }

    #[test]
    fn test_choose_option_reprompts_until_valid() {
        let mut console = console("\n9\nabc\n 3\n3\n");

        assert_eq!(choose_option(&mut console).unwrap(), MenuOption::View);

        let output = output_of(&console);
        assert_eq!(
            output
                .matches("Invalid input, please choose between 1-6")
                .count(),
            4
        );
    }

    #[test]
    fn test_choose_option_reprompts_on_invalid_utf8() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"2\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());

        assert_eq!(choose_option(&mut console).unwrap(), MenuOption::ViewAll);
        assert!(output_of(&console).contains("Invalid input, please choose between 1-6"));
    }

    #[test]
    fn test_choose_option_fails_when_input_runs_out() {
        let mut console = console("x\ny\n");
        assert!(matches!(
            choose_option(&mut console),
            Err(AppError::InputClosed)
        ));
    }
}

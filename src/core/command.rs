use crate::core::manager::{LibraryManager, Report};
use crate::core::LibraryInterface;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Exit,
    Unknown(String),
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "add" => Command::Add,
            "remove" => Command::Remove,
            "show" => Command::Show,
            "exit" => Command::Exit,
            _ => Command::Unknown(normalized),
        }
    }
}

const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// 互動式命令迴圈：每次提示都阻塞等待輸入，EOF 視同 exit
pub struct CommandLoop<L: LibraryInterface, R: BufRead, W: Write> {
    manager: LibraryManager<L>,
    input: R,
    output: W,
}

impl<L: LibraryInterface, R: BufRead, W: Write> CommandLoop<L, R, W> {
    pub fn new(manager: LibraryManager<L>, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn manager(&self) -> &LibraryManager<L> {
        &self.manager
    }

    pub fn into_parts(self) -> (LibraryManager<L>, W) {
        (self.manager, self.output)
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Book catalog ready");

        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                tracing::debug!("Input closed, leaving command loop");
                break;
            };

            let command = Command::from(line.as_str());
            tracing::debug!("Dispatching {:?}", command);

            match command {
                Command::Add => {
                    if let Some(report) = self.add()? {
                        self.report(&report)?;
                    }
                }
                Command::Remove => {
                    if let Some(title) = self.prompt("Enter book title to remove: ")? {
                        let report = self.manager.remove_book(&title);
                        self.report(&report)?;
                    }
                }
                Command::Show => {
                    let report = self.manager.show_books();
                    self.report(&report)?;
                }
                Command::Exit => break,
                Command::Unknown(_) => {
                    writeln!(self.output, "{}", INVALID_COMMAND)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<Option<Report>> {
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("Enter book author: ")? else {
            return Ok(None);
        };
        let Some(year) = self.prompt("Enter book year: ")? else {
            return Ok(None);
        };
        Ok(Some(self.manager.add_book(&title, &author, &year)))
    }

    fn report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.output, "{}", report)?;
        Ok(())
    }

    /// 顯示提示並讀取一行 (已去除前後空白)；輸入結束時回傳 None
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

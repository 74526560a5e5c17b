//! Interactive menu that feeds the robot's stack and queue.
//!
//! Each round presents the main menu, optionally collects one command into the
//! stack or the queue, and then drains both containers. Choosing *Exit* ends the
//! session before the drain. End of input is treated as *Exit*.

use crate::command::{Command, CommandKind};
use crate::error::ConsoleError;
use crate::robot::Robot;
use std::io::{BufRead, Write};
use tracing::warn;

/// Main menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Collect a command onto the LIFO stack (`1`).
    AddToStack,
    /// Collect a command onto the FIFO queue (`2`).
    AddToQueue,
    /// Drain without adding anything (`3`).
    Execute,
    /// Leave the session without draining (`4`).
    Exit,
}

impl MenuChoice {
    /// Resolves a main-menu selector. `None` for anything unrecognised.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(Self::AddToStack),
            "2" => Some(Self::AddToQueue),
            "3" => Some(Self::Execute),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Summary of a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Main-menu rounds completed, including the final one.
    pub rounds: usize,
    /// Commands executed across all drains.
    pub executed: usize,
}

/// A menu session over arbitrary line-oriented input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input/output pair. Nothing is read until [`run`](Self::run).
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Releases the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Drives `robot` until the operator exits or input runs out.
    pub fn run(&mut self, robot: &mut Robot) -> Result<SessionReport, ConsoleError> {
        let mut report = SessionReport::default();

        loop {
            report.rounds += 1;
            self.show_main_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::from_selector(&line) {
                Some(MenuChoice::AddToStack) => {
                    writeln!(self.output, "Enter command to add to stack")?;
                    let Some(command) = self.collect_command()? else {
                        break;
                    };
                    robot.push_command(command);
                    writeln!(self.output, "Command added to stack")?;
                }
                Some(MenuChoice::AddToQueue) => {
                    writeln!(self.output, "Enter command to add to queue")?;
                    let Some(command) = self.collect_command()? else {
                        break;
                    };
                    robot.enqueue_command(command);
                    writeln!(self.output, "Command added to queue")?;
                }
                Some(MenuChoice::Execute) => {}
                Some(MenuChoice::Exit) => break,
                None => warn!(selection = line.trim(), "unrecognised menu selection"),
            }

            report.executed += robot.drain().len();
        }

        let (stacked, queued) = robot.pending();
        if stacked + queued > 0 {
            warn!(stacked, queued, "session ended with commands still pending");
        }
        self.output.flush()?;
        Ok(report)
    }

    fn show_main_menu(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Main menu")?;
        writeln!(self.output, "1. Add command to stack")?;
        writeln!(self.output, "2. Add command to queue")?;
        writeln!(self.output, "3. Execute commands")?;
        writeln!(self.output, "4. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks for a command kind and its argument. `None` on end of input.
    fn collect_command(&mut self) -> Result<Option<Command>, ConsoleError> {
        writeln!(self.output, "Available commands:")?;
        for (i, kind) in CommandKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind.label())?;
        }
        self.output.flush()?;
        let Some(selector) = self.read_line()? else {
            return Ok(None);
        };
        let kind = CommandKind::from_selector(&selector)?;

        writeln!(self.output, "{}", kind.prompt())?;
        self.output.flush()?;
        let Some(argument) = self.read_line()? else {
            return Ok(None);
        };
        Ok(Some(kind.build(&argument)?))
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

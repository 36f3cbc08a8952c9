use std::{
    env,
    io::{self, stdin, stdout, BufRead, IsTerminal, StdinLock, Stdout, Write},
};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::app::{error::FetchError, prayers::PrayerDay, schedule};

/// Line-oriented terminal: prompts on the way in, schedules and notices on
/// the way out.
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let out = stdout();
        let styled = out.is_terminal() && env::var_os("NO_COLOR").is_none();
        Self::new(stdin().lock(), out, styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
        }
    }

    /// Asks a question and returns the trimmed answer. EOF reads as empty.
    pub fn prompt(&mut self, question: &str) -> io::Result<String> {
        if self.styled {
            queue!(
                self.output,
                SetAttribute(Attribute::Bold),
                Print(question),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            write!(self.output, "{question}")?;
        }
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            queue!(
                self.output,
                SetForegroundColor(Color::Red),
                Print(text),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        self.output.flush()
    }

    /// Writes the schedule table, or only the failure notice when the fetch
    /// did not produce one.
    pub fn show_schedule(
        &mut self,
        result: &Result<PrayerDay, FetchError>,
        city: &str,
        country: &str,
        show_hijri: bool,
    ) -> io::Result<()> {
        match result {
            Ok(day) => {
                write!(self.output, "{}", schedule::render(day, city, country, show_hijri))?;
                self.output.flush()
            }
            Err(e) => self.notice(&schedule::failure_notice(e)),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

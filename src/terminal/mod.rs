pub mod command;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::form::controller::FormController;
use crate::model::employee::{Field, InputKind};
use command::{Command, HELP};

/// Line-driven front end for a single form.
pub struct Session {
    form: FormController,
    prompt: String,
    // None submits against the local calendar date.
    today: Option<fn() -> NaiveDate>,
}

impl Session {
    pub fn new(form: FormController, prompt: impl Into<String>) -> Self {
        Self {
            form,
            prompt: prompt.into(),
            today: None,
        }
    }

    /// Replace the clock used when submitting.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Read commands until `quit` or end of input.
    #[instrument(name = "session", skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        info!("Session started");
        render_form(&self.form, &mut out)?;

        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush().context("Failed to flush output")?;

            line.clear();
            let read = input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "Rejected input");
                    writeln!(out, "{e}")?;
                }
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Set(field, value) => {
                self.form.update_field(field, value);
                render_form(&self.form, out)?;
            }
            Command::Clear(field) => {
                self.form.update_field(field, "");
                render_form(&self.form, out)?;
            }
            Command::Submit => {
                let outcome = match self.today {
                    Some(today) => self.form.submit(today()),
                    None => self.form.submit_now(),
                };
                // Errors are rendered inline with their fields.
                match outcome {
                    Ok(record) => debug!(employee_id = %record.employee_id, "Submit accepted"),
                    Err(errors) => debug!(count = errors.len(), "Submit rejected"),
                }
                render_form(&self.form, out)?;
            }
            Command::Reset => {
                self.form.reset();
                render_form(&self.form, out)?;
            }
            Command::Show => render_form(&self.form, out)?,
            Command::Fields => render_fields(out)?,
            Command::Departments => {
                for (i, dept) in self.form.departments().iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, dept)?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Blank | Command::Quit => {}
        }
        Ok(())
    }
}

fn render_form<W: Write>(form: &FormController, out: &mut W) -> Result<()> {
    writeln!(out, "Add Employee")?;
    for field in Field::iter() {
        let value = form.value(field);
        if value.is_empty() {
            let hint = field.placeholder().unwrap_or("");
            writeln!(out, "  {} ({}): [{}]", field.label(), field.key(), hint)?;
        } else {
            writeln!(out, "  {} ({}): {}", field.label(), field.key(), value)?;
        }
        if let Some(message) = form.error(field) {
            writeln!(out, "    ! {message}")?;
        }
    }
    if let Some(message) = form.success_message() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

fn render_fields<W: Write>(out: &mut W) -> Result<()> {
    for field in Field::iter() {
        let kind = match field.kind() {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Select => "choice",
            InputKind::Date => "date, YYYY-MM-DD",
        };
        writeln!(out, "  {:<14} {} ({})", field.key(), field.label(), kind)?;
    }
    Ok(())
}

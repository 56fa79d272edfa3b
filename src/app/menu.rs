use crate::core::registry::{Registry, UpdateOutcome};
use crate::core::Storage;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::parse_area;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddParcel,
    UpdateActualUse,
    GenerateReport,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddParcel),
            "2" => Some(Self::UpdateActualUse),
            "3" => Some(Self::GenerateReport),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Numbered menu driving one registry from line-based input.
///
/// Registry failures are printed and the loop carries on; only failures to
/// talk to the operator end it.
pub struct CommandLoop<'a, S: Storage, R: BufRead, W: Write> {
    registry: &'a mut Registry<S>,
    report_file: String,
    input: R,
    output: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> CommandLoop<'a, S, R, W> {
    pub fn new(
        registry: &'a mut Registry<S>,
        report_file: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            registry,
            report_file: report_file.into(),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an action (1-4): ")? else {
                break;
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::AddParcel) => self.add_parcel()?,
                Some(MenuChoice::UpdateActualUse) => self.update_actual_use()?,
                Some(MenuChoice::GenerateReport) => {
                    self.generate_report()?;
                    true
                }
                Some(MenuChoice::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add parcel")?;
        writeln!(self.output, "2. Update actual use")?;
        writeln!(self.output, "3. Generate report")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_parcel(&mut self) -> Result<bool> {
        let Some(cadastral_number) = self.prompt("Cadastral number: ")? else {
            return Ok(false);
        };
        let Some(area_input) = self.prompt("Area (ha): ")? else {
            return Ok(false);
        };
        let area = match parse_area(&area_input) {
            Ok(area) => area,
            Err(e) => {
                writeln!(self.output, "{}", e.user_friendly_message())?;
                return Ok(true);
            }
        };
        let Some(category) = self.prompt("Land category (e.g. agricultural): ")? else {
            return Ok(false);
        };
        let Some(permitted_use) = self.prompt("Permitted use: ")? else {
            return Ok(false);
        };

        let added = self
            .registry
            .add_parcel(cadastral_number.as_str(), area, category, permitted_use)
            .map(|_| ());
        match added {
            Ok(()) => writeln!(self.output, "Parcel {} added.", cadastral_number)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn update_actual_use(&mut self) -> Result<bool> {
        let Some(cadastral_number) = self.prompt("Cadastral number: ")? else {
            return Ok(false);
        };
        let Some(actual_use) = self.prompt("Actual use: ")? else {
            return Ok(false);
        };

        match self.registry.update_actual_use(&cadastral_number, actual_use) {
            Ok(UpdateOutcome::Updated { violations }) => {
                writeln!(
                    self.output,
                    "Actual use for parcel {} updated.",
                    cadastral_number
                )?;
                if !violations.is_empty() {
                    writeln!(self.output, "Violations found: {}", violations.len())?;
                }
            }
            Ok(UpdateOutcome::NotFound) => {
                writeln!(self.output, "Parcel {} not found.", cadastral_number)?
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn generate_report(&mut self) -> Result<()> {
        match self.registry.generate_report(&self.report_file) {
            Ok(path) => writeln!(self.output, "Report saved to {}", path)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn report_error(&mut self, error: &RegistryError) -> Result<()> {
        tracing::error!("❌ {}", error);
        writeln!(self.output, "Error: {}", error.user_friendly_message())?;
        writeln!(self.output, "Hint: {}", error.recovery_suggestion())?;
        Ok(())
    }
}

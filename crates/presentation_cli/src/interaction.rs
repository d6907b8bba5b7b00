//! Interactive prompt loop
//!
//! Collects an event once, then lets the user score it against as many
//! prediction models as they like. Generic over its streams so it can be
//! driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use application::{AdvisabilityService, ModelChoice, ModelKind};
use domain::Event;
use tracing::debug;

const INTRO: &str = "Let's determine how suitable your event is for the predicted weather.";
const DAYS_PROMPT: &str =
    "Enter how many days of data you wish to use for making the prediction: ";

/// Text console over arbitrary input and output streams
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Release the output stream
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt and read one line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Keep asking until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry_hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(answer.trim()) {
                return Ok(Some(value));
            }
            self.say(retry_hint)?;
        }
    }

    /// Ask for the event's name, setting, shelter and hour
    pub fn read_event(&mut self) -> Result<Option<Event>> {
        loop {
            let Some(name) = self.ask("What is the name of the event? ")? else {
                return Ok(None);
            };
            let Some(outdoors) = self.ask("Is the event outdoors? ")? else {
                return Ok(None);
            };
            let Some(cover) = self.ask("Is there covered shelter? ")? else {
                return Ok(None);
            };
            let Some(hour) = self.ask_until(
                "What time is the event? ",
                "Please enter an hour from 0 to 23.",
                |answer| answer.parse::<u8>().ok().filter(|h| *h <= 23),
            )?
            else {
                return Ok(None);
            };

            match Event::new(name, is_yes(&outdoors), is_yes(&cover), hour) {
                Ok(event) => return Ok(Some(event)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Show the model menu and read a selection (plus days where needed)
    pub fn read_model_choice(&mut self) -> Result<Option<ModelChoice>> {
        self.say("Select the weather prediction model you wish to use:")?;
        for kind in ModelKind::ALL {
            let entry = format!("  {}) {}", kind.menu_number(), kind.label());
            self.say(&entry)?;
        }

        let Some(kind) = self.ask_until("> ", "Please choose 1, 2 or 3.", |answer| {
            answer.parse::<ModelKind>().ok()
        })?
        else {
            return Ok(None);
        };

        if !kind.uses_days() {
            return Ok(Some(kind.with_days(1)));
        }

        let days = self.ask_until(
            DAYS_PROMPT,
            "Please enter a whole number of days (1 or more).",
            |answer| answer.parse::<usize>().ok().filter(|d| *d >= 1),
        )?;
        Ok(days.map(|days| kind.with_days(days)))
    }

    /// Ask whether to score the event again. End of input means no.
    pub fn check_again(&mut self) -> Result<bool> {
        let answer = self.ask_until(
            "Would you like to check again? ",
            "Please answer yes or no.",
            |answer| match answer.to_lowercase().as_str() {
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            },
        )?;
        Ok(answer.unwrap_or(false))
    }

    /// Run a whole session against the loaded history
    pub fn run(&mut self, service: &AdvisabilityService) -> Result<()> {
        self.say(INTRO)?;
        let Some(event) = self.read_event()? else {
            return Ok(());
        };
        debug!(%event, "Event captured");

        loop {
            let Some(choice) = self.read_model_choice()? else {
                return Ok(());
            };
            let report = service.assess(&event, choice)?;
            self.say(&report.to_string())?;

            if !self.check_again()? {
                return Ok(());
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

use std::io::{BufRead, Write};
use crate::errors::{OptimizeError, OptimizeResult, ResultExt};
use crate::i18n::{Locale, Message};

/// Line-based terminal questions. Invalid answers are re-asked; end of input
/// aborts with a `UserInputError`.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    locale: Locale,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, locale: Locale) -> Self {
        Self { reader, writer, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn say(&mut self, line: &str) -> OptimizeResult<()> {
        writeln!(self.writer, "{}", line).with_operation("writing to the terminal")
    }

    /// Returns the zero-based index of the chosen option.
    pub fn select(&mut self, question: &str, options: &[String]) -> OptimizeResult<usize> {
        self.say(&format!("\n❓ {}", question))?;
        for (index, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {}", index + 1, option))?;
        }

        loop {
            let answer = self.ask("> ")?;
            match Self::parse_choice(&answer, options.len()) {
                Some(index) => return Ok(index),
                None => self.say(&self.locale.text(Message::InvalidChoice { max: options.len() }))?,
            }
        }
    }

    /// Comma separated choices such as `1,3`. Duplicates are dropped and input
    /// order is kept.
    pub fn multi_select(&mut self, question: &str, options: &[String]) -> OptimizeResult<Vec<usize>> {
        self.say(&format!("\n❓ {}", question))?;
        for (index, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {}", index + 1, option))?;
        }

        loop {
            let answer = self.ask("> ")?;
            let choices: Option<Vec<usize>> = answer
                .split(',')
                .map(|part| Self::parse_choice(part, options.len()))
                .collect();

            match choices {
                Some(choices) if !choices.is_empty() => {
                    let mut unique = Vec::with_capacity(choices.len());
                    for choice in choices {
                        if !unique.contains(&choice) {
                            unique.push(choice);
                        }
                    }
                    return Ok(unique);
                }
                _ => self.say(&self.locale.text(Message::InvalidChoice { max: options.len() }))?,
            }
        }
    }

    /// Free text answer. An empty line takes `default` when there is one.
    pub fn input<F>(&mut self, question: &str, default: Option<&str>, validate: F) -> OptimizeResult<String>
    where
        F: Fn(&str) -> Result<(), String>,
    {
        let prompt = match default {
            Some(value) => format!("❓ {} ({}) ", question, value),
            None => format!("❓ {} ", question),
        };

        loop {
            let answer = self.ask(&prompt)?;
            let value = match (answer.is_empty(), default) {
                (true, Some(value)) => value.to_string(),
                _ => answer,
            };

            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(reason) => self.say(&format!("⚠️  {}", reason))?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str, default: bool) -> OptimizeResult<bool> {
        let hint = match (default, self.locale) {
            (true, Locale::En) => "[Y/n]",
            (false, Locale::En) => "[y/N]",
            (true, Locale::Pt) => "[S/n]",
            (false, Locale::Pt) => "[s/N]",
        };

        loop {
            let answer = self.ask(&format!("❓ {} {} ", question, hint))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" | "s" | "sim" => return Ok(true),
                "n" | "no" | "não" | "nao" => return Ok(false),
                _ => self.say(hint)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> OptimizeResult<String> {
        write!(self.writer, "{}", prompt).with_operation("writing to the terminal")?;
        self.writer.flush().with_operation("flushing the terminal")?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).with_operation("reading from the terminal")?;
        if read == 0 {
            return Err(OptimizeError::input_error("<end of input>", "an answer", "Run the command again"));
        }

        Ok(line.trim().to_string())
    }

    fn parse_choice(answer: &str, count: usize) -> Option<usize> {
        match answer.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => Some(number - 1),
            _ => None,
        }
    }
}

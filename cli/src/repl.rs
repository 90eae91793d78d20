use crate::present::Presenter;
use anyhow::Result;
use search_core::{Query, SearchEngine};
use std::io::{BufRead, Write};

const MENU: &str = "Search Options:
1. Boolean Search
2. Biword (Phrase) Search
3. Proximity Search
4. Soundex Search
5. Soundex Boolean Search
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Boolean,
    Phrase,
    Proximity,
    Phonetic,
    PhoneticBoolean,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Choice::Boolean),
            "2" => Some(Choice::Phrase),
            "3" => Some(Choice::Proximity),
            "4" => Some(Choice::Phonetic),
            "5" => Some(Choice::PhoneticBoolean),
            "6" | "exit" | "quit" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu over a built engine. Returns on `Exit` or end of input.
pub struct Repl<'a, R, W> {
    engine: &'a SearchEngine,
    presenter: &'a Presenter<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(engine: &'a SearchEngine, presenter: &'a Presenter<'a>, input: R, output: W) -> Self {
        Self { engine, presenter, input, output }
    }

    /// Print `message` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Collect the arguments for one query kind. `Ok(None)` at end of input.
    fn read_query(&mut self, choice: Choice) -> Result<Option<Query>> {
        let query = match choice {
            Choice::Boolean => {
                let Some(query) = self.prompt("Enter a boolean query (AND / OR / NOT): ")? else { return Ok(None) };
                Query::Boolean { query }
            }
            Choice::Phrase => {
                let Some(phrase) = self.prompt("Enter the phrase to search: ")? else { return Ok(None) };
                Query::Phrase { phrase }
            }
            Choice::Proximity => {
                let Some(first) = self.prompt("Enter the first word: ")? else { return Ok(None) };
                let Some(second) = self.prompt("Enter the second word: ")? else { return Ok(None) };
                let max_distance = loop {
                    let Some(distance) = self.prompt("Enter the maximum distance: ")? else { return Ok(None) };
                    match distance.parse::<u32>() {
                        Ok(d) => break d,
                        Err(_) => writeln!(self.output, "Distance must be a non-negative integer, got '{distance}'.")?,
                    }
                };
                Query::Proximity { first, second, max_distance }
            }
            Choice::Phonetic => {
                let Some(name) = self.prompt("Enter the name to search: ")? else { return Ok(None) };
                Query::Phonetic { name }
            }
            Choice::PhoneticBoolean => {
                let Some(query) = self.prompt("Enter a soundex query (and / or / not): ")? else { return Ok(None) };
                Query::PhoneticBoolean { query }
            }
            Choice::Exit => return Ok(None),
        };
        Ok(Some(query))
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice (1-6): ")? else { break };
            let Some(choice) = Choice::parse(&line) else {
                writeln!(self.output, "Unknown option '{line}'.")?;
                continue;
            };
            if choice == Choice::Exit {
                break;
            }
            let Some(query) = self.read_query(choice)? else { break };

            match self.engine.execute(&query) {
                Ok(outcome) => write!(self.output, "{}", self.presenter.render(&outcome))?,
                Err(err) => writeln!(self.output, "  {err}")?,
            }
        }
        Ok(())
    }
}

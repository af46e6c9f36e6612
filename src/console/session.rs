use std::io::{self, BufRead, Write};

use crate::engine::{self, Answer, AnswerError, Score};
use crate::models::Question;

use super::render;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayAll,
    PlayOne,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::PlayAll),
            "2" => Some(MenuChoice::PlayOne),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One run of the console game over a loaded collection.
///
/// Closing the input ends the session the same way choosing Exit does.
pub struct Session<'a, R, W> {
    questions: &'a [Question],
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(questions: &'a [Question], input: R, output: W) -> Self {
        Self {
            questions,
            input,
            output,
        }
    }

    /// Run the menu loop until the player exits.
    pub fn run(&mut self) -> io::Result<()> {
        render::welcome(&mut self.output, self.questions.len())?;

        loop {
            render::menu(&mut self.output)?;
            let Some(line) = self.prompt("\nChoose an option (1-3): ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::PlayAll) => {
                    self.play_all()?;
                }
                Some(MenuChoice::PlayOne) => {
                    self.play_one()?;
                }
                Some(MenuChoice::Exit) => break,
                None => render::error(
                    &mut self.output,
                    "Invalid option. Please choose 1, 2 or 3.",
                )?,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()
    }

    /// Ask every question in order and print the summary.
    ///
    /// Returns `None` when there is nothing to score: an empty collection, or
    /// input that closed before the round finished.
    pub fn play_all(&mut self) -> io::Result<Option<Score>> {
        if self.questions.is_empty() {
            render::error(&mut self.output, "There are no questions to play.")?;
            return Ok(None);
        }

        let questions = self.questions;
        let mut score = Score::new(questions.len());
        render::play_all_header(&mut self.output, score.total)?;

        for question in questions {
            let Some(correct) = self.ask(question, false)? else {
                return Ok(None);
            };
            score.record(correct);
        }

        render::summary(&mut self.output, &score)?;
        tracing::debug!(correct = score.correct, total = score.total, "round finished");
        Ok(Some(score))
    }

    /// Ask a single question chosen by id. Nothing is scored.
    ///
    /// Returns whether the answer was correct, or `None` when the id did not
    /// match any question or the input closed.
    pub fn play_one(&mut self) -> io::Result<Option<bool>> {
        render::play_one_header(&mut self.output, self.questions)?;

        let id = loop {
            let Some(line) = self.prompt("\nEnter the ID of the question to play: ")? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(id) => break id,
                Err(_) => render::error(&mut self.output, "Please enter a valid number.")?,
            }
        };

        let questions = self.questions;
        let Some(question) = engine::find_by_id(questions, id) else {
            render::error(
                &mut self.output,
                &format!("No question found with ID {}", id),
            )?;
            return Ok(None);
        };

        self.ask(question, true)
    }

    /// Display a question and keep asking until the answer normalizes.
    fn ask(&mut self, question: &Question, reveal: bool) -> io::Result<Option<bool>> {
        render::question(&mut self.output, question)?;

        let label = format!(
            "\nYour answer (number 1-{} or option text): ",
            question.choices.len()
        );

        loop {
            let Some(line) = self.prompt(&label)? else {
                return Ok(None);
            };

            match engine::normalize(&line, &question.choices) {
                Answer::Index(index) => {
                    let correct = engine::is_correct(index, question.correct_index);
                    render::verdict(&mut self.output, question, correct, reveal)?;
                    return Ok(Some(correct));
                }
                Answer::Invalid => {
                    let err = AnswerError::InvalidFormat {
                        choices: question.choices.len(),
                    };
                    render::error(&mut self.output, &format!("Invalid answer: {}.", err))?;
                }
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` once input is closed.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

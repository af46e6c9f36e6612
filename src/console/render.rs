use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::engine::Score;
use crate::models::Question;

const RULE_WIDTH: usize = 50;

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "{}", title.cyan().bold())?;
    rule(out)
}

pub fn welcome(out: &mut impl Write, count: usize) -> io::Result<()> {
    writeln!(out, "{}", "TRIVIA GAME - QUESTION READER".cyan().bold())?;
    rule(out)?;
    writeln!(out, "Loaded {} questions.", count)
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "What would you like to do?")?;
    writeln!(out, "1. Play all questions")?;
    writeln!(out, "2. Play one question by ID")?;
    writeln!(out, "3. Exit")
}

pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

pub fn play_all_header(out: &mut impl Write, total: usize) -> io::Result<()> {
    heading(out, "PLAYING ALL QUESTIONS")?;
    writeln!(out, "Total questions: {}", total)
}

pub fn play_one_header(out: &mut impl Write, questions: &[Question]) -> io::Result<()> {
    heading(out, "PLAYING ONE QUESTION")?;
    writeln!(out, "Available question IDs:")?;
    for question in questions {
        writeln!(out, "  ID {}: {}", question.id, question.category)?;
    }
    Ok(())
}

pub fn question(out: &mut impl Write, question: &Question) -> io::Result<()> {
    heading(
        out,
        &format!("Question #{} - {}", question.id, question.category),
    )?;
    writeln!(out, "{}", question.prompt.as_str().bold())?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    for (index, choice) in question.choices.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, choice)?;
    }
    Ok(())
}

/// Report one answer; `reveal` also shows the right option when wrong.
pub fn verdict(
    out: &mut impl Write,
    question: &Question,
    correct: bool,
    reveal: bool,
) -> io::Result<()> {
    if correct {
        return writeln!(out, "{}", "Correct!".green().bold());
    }

    writeln!(out, "{}", "Incorrect!".red().bold())?;
    if reveal {
        if let Some(text) = question.correct_choice() {
            writeln!(
                out,
                "The correct answer was: {}. {}",
                question.correct_index + 1,
                text
            )?;
        }
    }
    Ok(())
}

pub fn summary(out: &mut impl Write, score: &Score) -> io::Result<()> {
    heading(out, "GAME OVER")?;
    writeln!(out, "Final score: {}", score)?;

    if let (Some(percentage), Some(tier)) = (score.percentage(), score.tier()) {
        writeln!(out, "Correct answers: {:.1}%", percentage)?;
        writeln!(out, "{}", tier.banner().yellow().bold())?;
    }
    Ok(())
}

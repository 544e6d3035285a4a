use std::io::{self, BufRead, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::app::{App, Command, Mode, Outcome};
use crate::constants::FALLBACK_WIDTH;
use crate::error::Result;
use crate::utils::timestamp_to_elapsed;

const QUESTION_MENU: &str = "[v]iew question  [s]how answers  [n]ext  [p]revious  [h]elp  [q]uit";
const ANSWER_MENU: &str = "[b]ack  [n]ext  [p]revious  [h]elp  [q]uit";

/// Width to wrap text at, taken from the terminal when there is one.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .ok()
        .filter(|cols| *cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

pub fn draw_duck<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        Print("Tell me what's wrong\n"),
        SetForegroundColor(Color::Yellow),
        Print("                     <(o )___\n"),
        Print("                      ( ._> /\n"),
        Print("                       `---'\n"),
        ResetColor,
        Print("You: ")
    )?;
    out.flush()
}

/// Asks for a query until a non-blank line arrives. `None` on end of input.
pub fn prompt_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    loop {
        draw_duck(out)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let query = line.trim();
        if !query.is_empty() {
            return Ok(Some(query.to_string()));
        }
    }
}

/// Drives the command loop until the user quits or input runs out.
pub fn run_app<R: BufRead, W: Write>(mut input: R, out: &mut W, mut app: App, width: usize) -> Result<()> {
    draw_header(out, &app)?;
    draw_outcome(out, &app, Outcome::Title, width)?;

    loop {
        draw_prompt(out, &app)?;

        let mut line = String::new();
        let command = if input.read_line(&mut line)? == 0 {
            Command::Quit
        } else {
            Command::parse(&line)
        };

        let outcome = app.handle(command)?;
        draw_outcome(out, &app, outcome, width)?;
        if outcome == Outcome::Quit {
            return Ok(());
        }
    }
}

fn draw_header<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("Results for: {}\n", app.query)),
        SetAttribute(Attribute::Reset)
    )
}

fn draw_prompt<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    let menu = match app.mode {
        Mode::Questions => QUESTION_MENU,
        Mode::Answers(_) => ANSWER_MENU,
    };
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(format!("\n{}\n", menu)),
        ResetColor,
        Print("> ")
    )?;
    out.flush()
}

fn draw_outcome<W: Write>(out: &mut W, app: &App, outcome: Outcome, width: usize) -> Result<()> {
    match outcome {
        Outcome::Title => draw_title(out, app, width)?,
        Outcome::Body => {
            draw_title(out, app, width)?;
            if let Some(question) = app.current_question() {
                draw_rule(out, Color::Yellow, width)?;
                draw_text(out, &question.body, width)?;
            }
        }
        Outcome::Answer => {
            if let Some((index, count, body)) = app.current_answer()? {
                queue!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format!("\nAnswer {}/{}\n", index + 1, count)),
                    ResetColor
                )?;
                draw_rule(out, Color::Green, width)?;
                draw_text(out, body, width)?;
            }
        }
        Outcome::NoAnswers => queue!(out, Print("No answers available for this question.\n"))?,
        Outcome::NoResults => queue!(out, Print(format!("No results found for: {}\n", app.query)))?,
        Outcome::Help => draw_help(out)?,
        Outcome::Invalid => queue!(
            out,
            SetForegroundColor(Color::Red),
            Print("Invalid choice\n"),
            ResetColor
        )?,
        Outcome::Nothing => {}
        Outcome::Quit => queue!(out, Print("\nGood luck! Quack.\n"))?,
    }
    out.flush()?;
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, app: &App, width: usize) -> io::Result<()> {
    let Some(question) = app.current_question() else {
        return queue!(out, Print(format!("No results found for: {}\n", app.query)));
    };

    let mut info = format!("Question {}/{}", app.selected + 1, app.questions.len());
    if let Some(score) = question.score {
        info.push_str(&format!(" · {} votes", score));
    }
    if let Some(created) = question.creation_date {
        info.push_str(&format!(" · {}", timestamp_to_elapsed(created)));
    }
    info.push_str(&format!(" · {} answers", question.answer_count()));

    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(format!("\n{}\n", info)),
        ResetColor,
        SetAttribute(Attribute::Bold)
    )?;
    draw_text(out, &question.title, width)?;
    queue!(out, SetAttribute(Attribute::Reset))?;

    if let Some(link) = &question.link {
        queue!(
            out,
            SetForegroundColor(Color::Blue),
            Print(format!("{}\n", link)),
            ResetColor
        )?;
    }
    Ok(())
}

fn draw_help<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        Print("\nWhile browsing questions:\n"),
        Print(format!("  {}\n", QUESTION_MENU)),
        Print("While reading answers:\n"),
        Print(format!("  {}\n", ANSWER_MENU)),
        Print("Type one letter and press enter.\n")
    )
}

fn draw_rule<W: Write>(out: &mut W, color: Color, width: usize) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color),
        Print(format!("{}\n", "─".repeat(width.saturating_sub(4).max(1)))),
        ResetColor
    )
}

fn draw_text<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    for line in text.lines() {
        if line.trim().is_empty() {
            queue!(out, Print("\n"))?;
            continue;
        }
        for wrapped in textwrap::wrap(line, width.max(20)) {
            queue!(out, Print(format!("{}\n", wrapped)))?;
        }
    }
    Ok(())
}

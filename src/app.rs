use crate::error::Result;
use crate::models::Question;

/// A single-key command read from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowBody,
    ShowAnswers,
    Next,
    Previous,
    Back,
    Help,
    Quit,
    Empty,
    Invalid,
}

impl Command {
    /// Parses one input line. Only a single (case-insensitive) key is accepted.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut chars = line.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return if line.is_empty() { Command::Empty } else { Command::Invalid };
        };

        match key.to_ascii_lowercase() {
            'v' => Command::ShowBody,
            's' => Command::ShowAnswers,
            'n' => Command::Next,
            'p' => Command::Previous,
            'b' => Command::Back,
            'h' => Command::Help,
            'q' => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

/// What the terminal should show after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Title,
    Body,
    Answer,
    NoAnswers,
    NoResults,
    Help,
    Invalid,
    Nothing,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Questions,
    Answers(AnswersView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswersView {
    pub selected: usize,
}

pub struct App {
    pub questions: Vec<Question>,
    pub query: String,
    pub selected: usize,
    pub mode: Mode,
}

impl App {
    pub fn new(questions: Vec<Question>, query: String) -> Self {
        Self {
            questions,
            query,
            selected: 0,
            mode: Mode::Questions,
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => return Ok(Outcome::Help),
            Command::Empty => return Ok(Outcome::Nothing),
            _ => {}
        }

        match self.mode {
            Mode::Questions => self.on_questions(command),
            Mode::Answers(view) => self.on_answers(command, view),
        }
    }

    fn on_questions(&mut self, command: Command) -> Result<Outcome> {
        let count = self.questions.len();
        let wants_question = matches!(
            command,
            Command::ShowBody | Command::ShowAnswers | Command::Next | Command::Previous
        );
        if count == 0 && wants_question {
            return Ok(Outcome::NoResults);
        }

        let outcome = match command {
            Command::ShowBody => Outcome::Body,
            Command::ShowAnswers => {
                if self.questions[self.selected].answers()?.is_empty() {
                    Outcome::NoAnswers
                } else {
                    self.mode = Mode::Answers(AnswersView { selected: 0 });
                    Outcome::Answer
                }
            }
            Command::Next => {
                self.selected = (self.selected + 1) % count;
                Outcome::Title
            }
            Command::Previous => {
                self.selected = (self.selected + count - 1) % count;
                Outcome::Title
            }
            _ => Outcome::Invalid,
        };
        Ok(outcome)
    }

    fn on_answers(&mut self, command: Command, view: AnswersView) -> Result<Outcome> {
        // The view is only entered with at least one answer.
        let count = self.questions[self.selected].answers()?.len();

        let outcome = match command {
            Command::Back => {
                self.mode = Mode::Questions;
                Outcome::Title
            }
            Command::Next => {
                self.mode = Mode::Answers(AnswersView {
                    selected: (view.selected + 1) % count,
                });
                Outcome::Answer
            }
            Command::Previous => {
                self.mode = Mode::Answers(AnswersView {
                    selected: (view.selected + count - 1) % count,
                });
                Outcome::Answer
            }
            _ => Outcome::Invalid,
        };
        Ok(outcome)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.selected)
    }

    pub fn answer_index(&self) -> Option<usize> {
        match self.mode {
            Mode::Questions => None,
            Mode::Answers(view) => Some(view.selected),
        }
    }

    /// Body of the answer on screen, with its position and the total count.
    pub fn current_answer(&self) -> Result<Option<(usize, usize, &str)>> {
        let (Some(index), Some(question)) = (self.answer_index(), self.current_question()) else {
            return Ok(None);
        };
        let answers = question.answers()?;
        Ok(answers
            .get(index)
            .map(|body| (index, answers.len(), body.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(title: &str, answers: usize) -> Question {
        let answers = (0..answers)
            .map(|i| json!({ "body_markdown": format!("{title} answer {i}") }))
            .collect();
        Question::new(title, format!("{title} body"), answers)
    }

    fn app(answer_counts: &[usize]) -> App {
        let questions = answer_counts
            .iter()
            .enumerate()
            .map(|(i, n)| question(&format!("q{i}"), *n))
            .collect();
        App::new(questions, "query".to_string())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("n\n"), Command::Next);
        assert_eq!(Command::parse("P"), Command::Previous);
        assert_eq!(Command::parse(" s "), Command::ShowAnswers);
        assert_eq!(Command::parse("v"), Command::ShowBody);
        assert_eq!(Command::parse("b"), Command::Back);
        assert_eq!(Command::parse("h"), Command::Help);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("\n"), Command::Empty);
        assert_eq!(Command::parse("x"), Command::Invalid);
        assert_eq!(Command::parse("next"), Command::Invalid);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut app = app(&[1; 5]);
        assert_eq!(app.handle(Command::Previous).unwrap(), Outcome::Title);
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut app = app(&[1; 5]);
        app.selected = 4;
        assert_eq!(app.handle(Command::Next).unwrap(), Outcome::Title);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_show_body_keeps_state() {
        let mut app = app(&[1, 1]);
        assert_eq!(app.handle(Command::ShowBody).unwrap(), Outcome::Body);
        assert_eq!(app.mode, Mode::Questions);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_entering_answers_starts_at_zero() {
        let mut app = app(&[3, 2]);
        app.handle(Command::ShowAnswers).unwrap();
        app.handle(Command::Next).unwrap();
        app.handle(Command::Next).unwrap();
        assert_eq!(app.answer_index(), Some(2));

        app.handle(Command::Back).unwrap();
        assert_eq!(app.answer_index(), None);
        assert_eq!(app.handle(Command::ShowAnswers).unwrap(), Outcome::Answer);
        assert_eq!(app.answer_index(), Some(0));

        app.handle(Command::Back).unwrap();
        app.handle(Command::Next).unwrap();
        app.handle(Command::ShowAnswers).unwrap();
        assert_eq!(app.answer_index(), Some(0));
        assert_eq!(app.current_answer().unwrap(), Some((0, 2, "q1 answer 0")));
    }

    #[test]
    fn test_answer_paging_wraps() {
        let mut app = app(&[3]);
        app.handle(Command::ShowAnswers).unwrap();

        assert_eq!(app.handle(Command::Previous).unwrap(), Outcome::Answer);
        assert_eq!(app.answer_index(), Some(2));
        app.handle(Command::Next).unwrap();
        assert_eq!(app.answer_index(), Some(0));
    }

    #[test]
    fn test_question_without_answers_stays_in_questions() {
        let mut app = app(&[0, 1]);
        assert_eq!(app.handle(Command::ShowAnswers).unwrap(), Outcome::NoAnswers);
        assert_eq!(app.mode, Mode::Questions);
        assert_eq!(app.current_answer().unwrap(), None);
    }

    #[test]
    fn test_empty_results_never_divide() {
        let mut app = app(&[]);
        for command in [
            Command::Next,
            Command::Previous,
            Command::ShowBody,
            Command::ShowAnswers,
        ] {
            assert_eq!(app.handle(command).unwrap(), Outcome::NoResults);
        }
        assert_eq!(app.handle(Command::Back).unwrap(), Outcome::Invalid);
        assert!(app.current_question().is_none());
    }

    #[test]
    fn test_commands_outside_their_view_are_invalid() {
        let mut app = app(&[2]);
        assert_eq!(app.handle(Command::Back).unwrap(), Outcome::Invalid);
        assert_eq!(app.handle(Command::Invalid).unwrap(), Outcome::Invalid);

        app.handle(Command::ShowAnswers).unwrap();
        assert_eq!(app.handle(Command::ShowBody).unwrap(), Outcome::Invalid);
        assert_eq!(app.handle(Command::ShowAnswers).unwrap(), Outcome::Invalid);
        assert_eq!(app.answer_index(), Some(0));
    }

    #[test]
    fn test_empty_help_and_quit_in_both_views() {
        let mut app = app(&[1]);
        assert_eq!(app.handle(Command::Empty).unwrap(), Outcome::Nothing);
        assert_eq!(app.handle(Command::Help).unwrap(), Outcome::Help);

        app.handle(Command::ShowAnswers).unwrap();
        assert_eq!(app.handle(Command::Empty).unwrap(), Outcome::Nothing);
        assert_eq!(app.handle(Command::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_broken_answer_fails_fast() {
        let mut app = App::new(
            vec![Question::new("t", "b", vec![json!({ "score": 3 })])],
            "query".to_string(),
        );
        assert!(app.handle(Command::ShowAnswers).is_err());
        assert_eq!(app.mode, Mode::Questions);
    }
}

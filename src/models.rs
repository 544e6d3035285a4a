use std::cell::OnceCell;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::extract::extract_field;
use crate::utils::decode_entities;

/// Top-level search envelope. `items` is absent on API error bodies.
#[derive(serde::Deserialize, Debug, Default)]
pub struct SearchResponse {
    pub items: Option<Vec<Value>>,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Question {
    pub title: String,
    pub body: String,
    pub score: Option<i64>,
    pub creation_date: Option<i64>,
    pub link: Option<String>,
    answers: Vec<Value>,
    answer_bodies: OnceCell<Vec<String>>,
}

impl Question {
    pub fn new(title: impl Into<String>, body: impl Into<String>, answers: Vec<Value>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            score: None,
            creation_date: None,
            link: None,
            answers,
            answer_bodies: OnceCell::new(),
        }
    }

    /// Number of raw answers, without materializing them.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Answer bodies, extracted on first use and cached afterwards.
    pub fn answers(&self) -> Result<&[String]> {
        if let Some(bodies) = self.answer_bodies.get() {
            return Ok(bodies);
        }

        let bodies: Vec<String> = extract_field(&self.answers, "body_markdown", self.answers.len())?
            .iter()
            .map(|body| decode_entities(body))
            .collect();
        Ok(self.answer_bodies.get_or_init(|| bodies))
    }
}

/// Builds at most `limit` questions from the `items` array, in response order.
pub fn parse_questions(items: &[Value], limit: usize) -> Result<Vec<Question>> {
    let count = limit.min(items.len());
    let titles = extract_field(items, "title", count)?;
    let bodies = extract_field(items, "body_markdown", count)?;

    titles
        .into_iter()
        .zip(bodies)
        .enumerate()
        .map(|(index, (title, body))| {
            let item = &items[index];
            let answers = item
                .get("answers")
                .and_then(Value::as_array)
                .cloned()
                .ok_or_else(|| Error::MissingField {
                    field: "answers".to_string(),
                    index,
                })?;

            let mut question = Question::new(decode_entities(&title), decode_entities(&body), answers);
            question.score = item.get("score").and_then(Value::as_i64);
            question.creation_date = item.get("creation_date").and_then(Value::as_i64);
            question.link = item.get("link").and_then(Value::as_str).map(str::to_string);
            Ok(question)
        })
        .collect()
}

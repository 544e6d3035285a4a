use std::io;

use reqwest::blocking::Client;

use crate::buffer::ResponseBuffer;
use crate::constants::{SEARCH_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::models::{parse_questions, Question, SearchResponse};

/// Plus-encodes spaces. Every other character is passed through untouched.
pub fn replace_space(text: &str) -> String {
    text.replace(' ', "+")
}

/// Search URL for `query`, with the query as the final `q` parameter.
pub fn build_search_request(query: &str) -> String {
    format!("{}{}", SEARCH_URL, replace_space(query))
}

/// Blocking client that sends `Accept-Encoding: gzip, deflate` and decodes
/// compressed bodies before they reach the buffer.
pub fn new_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .deflate(true)
        .build()
        .map_err(Error::ClientInit)
}

/// Raw body of a single GET, plus whether the transfer went wrong.
#[derive(Debug)]
pub struct FetchOutcome {
    pub buffer: ResponseBuffer,
    pub transport_failed: bool,
}

/// Performs one GET and streams the body into a [`ResponseBuffer`].
///
/// Transport problems are logged and reported through `transport_failed`;
/// only running out of memory is an error.
pub fn fetch(client: &Client, url: &str) -> Result<FetchOutcome> {
    let mut buffer = ResponseBuffer::new();
    tracing::info!(url = %url, "Executing search request");

    let mut resp = match client.get(url).send() {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(url = %url, %err, "Search request failed");
            return Ok(FetchOutcome {
                buffer,
                transport_failed: true,
            });
        }
    };

    let status = resp.status();
    let mut transport_failed = !status.is_success();
    if transport_failed {
        tracing::warn!(status = ?status, "Request failed with non-success status");
    }

    if let Err(err) = io::copy(&mut resp, &mut buffer) {
        if err.kind() == io::ErrorKind::OutOfMemory {
            return Err(Error::OutOfMemory);
        }
        tracing::warn!(%err, bytes = buffer.len(), "Response body was cut short");
        transport_failed = true;
    }

    tracing::info!(status = ?status, bytes = buffer.len(), "Search request completed");
    Ok(FetchOutcome {
        buffer,
        transport_failed,
    })
}

/// Turns a fetched body into at most `limit` questions.
///
/// After a failed transfer an unusable body means "no results"; after a
/// successful one it is an error.
pub fn questions_from_outcome(outcome: &FetchOutcome, limit: usize) -> Result<Vec<Question>> {
    let response: SearchResponse = match serde_json::from_slice(outcome.buffer.as_bytes()) {
        Ok(response) => response,
        Err(err) if outcome.transport_failed => {
            tracing::warn!(%err, "Discarding unparseable body from failed request");
            SearchResponse::default()
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(message) = &response.error_message {
        tracing::warn!(message = %message, "API reported an error");
    }

    match response.items {
        Some(items) => parse_questions(&items, limit),
        None if outcome.transport_failed => Ok(Vec::new()),
        None => Err(Error::MissingKey("items")),
    }
}

pub fn fetch_stackoverflow_questions(client: &Client, query: &str, limit: usize) -> Result<Vec<Question>> {
    let url = build_search_request(query);
    let outcome = fetch(client, &url)?;
    questions_from_outcome(&outcome, limit)
}

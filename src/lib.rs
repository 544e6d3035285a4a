//! Rubber duck debugging with a little help from Stack Overflow.
//!
//! - `api` builds the search URL and streams the response into a `ResponseBuffer`
//! - `models` and `extract` turn the JSON body into questions and answers
//! - `app` is the question/answer navigation state machine
//! - `ui` draws it to the terminal and reads commands

pub mod api;
pub mod app;
pub mod buffer;
pub mod constants;
pub mod error;
pub mod extract;
pub mod models;
pub mod ui;
pub mod utils;

pub use error::{Error, Result};

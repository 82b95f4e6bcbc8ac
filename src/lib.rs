//! MLB Chat - free-text baseball questions answered from the MLB Stats API
//!
//! `command::QuestionRouter` is the entry point: it classifies a question,
//! runs the matching handler against a `api::DataSource`, and returns
//! display-ready text.

pub mod api;
pub mod command;
pub mod core;
pub mod server;

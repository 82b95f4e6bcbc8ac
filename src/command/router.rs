//! Question routing - the single entry point from the outside world
//!
//! question -> classify -> handler -> answer text
//!
//! The router owns the collaborators (DataSource, config, calendar) and adds
//! the last safety net: a handler that panics or runs past the answer timeout
//! still yields a polite answer, never raw error text.

use crate::api::source::DataSource;
use crate::command::classifier::{classify_question, Intent, Question};
use crate::command::handlers::{IntentHandlers, HELP_TEXT};
use crate::core::calendar::GameCalendar;
use crate::core::config::ChatConfig;
use std::sync::Arc;
use std::time::Duration;

/// Reply to a blank question
pub const EMPTY_QUESTION_TEXT: &str = "Ask me anything about MLB!";

/// Reply when answering failed outright
pub const APOLOGY_TEXT: &str =
    "Sorry, I couldn't get that answer right now. Please try again in a moment.";

/// Routes free-text baseball questions to their handlers
#[derive(Clone)]
pub struct QuestionRouter {
    source: Arc<dyn DataSource>,
    config: Arc<ChatConfig>,
    calendar: GameCalendar,
}

impl QuestionRouter {
    pub fn new(source: Arc<dyn DataSource>, config: Arc<ChatConfig>) -> Self {
        Self {
            source,
            config,
            calendar: GameCalendar::live(),
        }
    }

    /// Pin "today" (and so "yesterday") for schedule questions
    pub fn with_calendar(mut self, calendar: GameCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Intent the router would pick for `text`
    pub fn classify(&self, text: &str) -> Intent {
        classify_question(&Question::new(text))
    }

    /// Answer a question; never fails and never returns an empty string
    pub async fn route_question(&self, text: &str) -> String {
        let question = Question::new(text);
        if question.normalized().is_empty() {
            return EMPTY_QUESTION_TEXT.into();
        }

        let intent = classify_question(&question);
        tracing::debug!(?intent, question = text, "classified question");

        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        let calendar = self.calendar;
        let raw = text.to_string();

        // Run on its own task so a panicking handler surfaces as a JoinError
        let mut task = tokio::spawn(async move {
            let question = Question::new(&raw);
            IntentHandlers::new(source.as_ref(), &config, calendar)
                .handle(intent, &question)
                .await
        });

        let limit = Duration::from_secs(self.config.answer_timeout_secs);
        match tokio::time::timeout(limit, &mut task).await {
            Ok(Ok(answer)) if !answer.trim().is_empty() => answer,
            Ok(Ok(_)) => {
                tracing::warn!(?intent, "handler produced an empty answer");
                HELP_TEXT.into()
            }
            Ok(Err(e)) => {
                tracing::error!(?intent, error = %e, "handler failed");
                APOLOGY_TEXT.into()
            }
            Err(_) => {
                task.abort();
                tracing::warn!(?intent, timeout_secs = limit.as_secs(), "answer timed out");
                APOLOGY_TEXT.into()
            }
        }
    }
}

//! Question answering pipeline
//!
//! raw text -> Question -> classify_question -> Intent -> IntentHandlers -> answer text
//!
//! The stat vocabulary and the name extractor feed both classification and
//! the handlers.

pub mod classifier;
pub mod extractor;
pub mod handlers;
pub mod resolver;
pub mod router;
pub mod vocabulary;

pub use classifier::{classify, Intent, Question};
pub use extractor::extract_name;
pub use handlers::IntentHandlers;
pub use resolver::{PlayerMatch, PlayerResolver};
pub use router::QuestionRouter;
pub use vocabulary::{resolve_stat, StatSpec};

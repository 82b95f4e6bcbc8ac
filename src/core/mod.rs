pub mod calendar;
pub mod config;
pub mod error;

pub use calendar::GameCalendar;
pub use config::ChatConfig;

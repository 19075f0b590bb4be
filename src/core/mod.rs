//! Core abstractions: events, messages, commands, and the screen trait.

pub mod command;
pub mod event;
pub mod message;
pub mod screen;

pub use command::{Command, CommandEnv};
pub use event::Event;
pub use message::AppMessage;
pub use screen::{Screen, UpdateResult};

//! HTTP handlers

pub mod answers;
pub mod flashcards;
pub mod outline;
pub mod progress;
pub mod quiz;

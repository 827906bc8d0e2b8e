//! Core engine types: languages, configuration, RNG and errors.
//!
//! This module contains the building blocks shared by the word repository,
//! the cards and the game manager.

pub mod config;
pub mod error;
pub mod language;
pub mod rng;

pub use config::BingoConfig;
pub use error::{CardError, LineError, LoadError, RepositoryError, UnknownWords};
pub use language::{Language, LanguageMap};
pub use rng::GameRng;

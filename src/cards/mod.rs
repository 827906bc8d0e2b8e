//! Card system: identifiers and cards.
//!
//! ## Key Types
//!
//! - `CardId`: Validated 8-character id (`SP000001`) carrying its language
//! - `Card`: Target words, optional player and match progress
//!
//! ## Players
//!
//! Cards can have `player: None`; displays show `N/A` instead.

pub mod card;
pub mod id;

pub use card::{Card, NO_PLAYER};
pub use id::CardId;

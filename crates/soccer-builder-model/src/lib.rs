#![forbid(unsafe_code)]
//! Roster model SSOT.
//!
//! Wire-format entities for the roster builder: a single [`Team`] owning an
//! ordered list of [`Player`]s plus pitch and club display settings. Field
//! names serialize exactly as the HTTP clients expect them (camelCase on the
//! aggregate, the nine fixed stat names on [`Stats`]).

mod stats;
mod team;

pub use stats::{Stats, DEFAULT_STAT};
pub use team::{ClubInfo, PitchSettings, Player, Position, Team};

pub const CRATE_NAME: &str = "soccer-builder-model";

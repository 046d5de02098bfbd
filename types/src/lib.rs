//! Core container types for Sundry.
//!
//! This crate contains pure data types with no IO, no async, and minimal dependencies:
//!
//! - [`Maybe`]: a value or nothing
//! - [`Outcome`]: a value or the [`Fault`] explaining why there is none
//! - conversions between the two, in [`convert`]
//! - [`Enumeration`] / [`Variant`]: closed sets of named values
//! - [`Stack`]: a LIFO container

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

pub mod convert;
mod enumeration;
mod fault;
mod maybe;
mod outcome;
mod stack;
mod util;

pub use convert::{maybe_to_outcome, outcome_to_maybe};
pub use enumeration::{EnumError, Enumeration, Variant};
pub use fault::{Fault, StaticMessage};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use stack::Stack;
pub use util::{ternary, times};

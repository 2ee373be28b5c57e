//! # lettercount-core
//!
//! JSON rendering and measurement for the lettercount relay.
//!
//! The relay answers with the length, in characters, of a JSON value's
//! text form. This crate defines that text form ([`render`]), the count
//! taken over it ([`letter_count`]), and the total lookup used to pick
//! the measured value out of an upstream document ([`field_or_null`]).

mod measure;
mod render;

pub use measure::{field_or_null, letter_count};
pub use render::{render, SpacedFormatter};

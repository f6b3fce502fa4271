//! The root of this crate doesn't do anything.
//! It just re-exports its contents.

pub mod deserialize;
pub mod prefabs;
pub mod ring;
pub use deserialize::*;

#[macro_use]
extern crate lazy_static;

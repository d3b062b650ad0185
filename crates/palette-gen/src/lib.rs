//! BGR555 palette constant generator for the Game Boy Advance.
//!
//! GBA palette RAM holds 15-bit colours (bits 0-4 red, 5-9 green, 10-14
//! blue). This crate converts a fixed 16-colour `#RRGGBB` palette into
//! those packed values and emits one assignment statement per slot, ready
//! to paste into the graphics initialisation code.

pub mod color;
pub mod palette;

pub use color::Rgb;
pub use palette::{PALETTE, assignments};

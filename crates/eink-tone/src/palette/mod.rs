//! Palette types for grey e-paper panels.
//!
//! The palettes are fixed per bit depth; see [`BitDepth`].

mod bit_depth;

pub use bit_depth::BitDepth;

//! Glyph store implementations

pub mod w25q;

pub use w25q::W25qGlyphStore;

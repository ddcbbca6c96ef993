//! Centralized theme system for the flight tracker screen.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Glyphs with Nerd Font and plain Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;

//! ArtDrop - Terminal Mockup
//!
//! A terminal rendition of the ArtDrop art-kit delivery app mockup:
//! every screen of the original design rendered as a TUI view, wired
//! together by a stack-based navigation controller over mock data.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;

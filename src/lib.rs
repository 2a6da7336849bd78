//! Li-Stick - a terminal showcase for the Li-Stick smart cane
//!
//! The site is a set of pages with autoplay carousels, a newsletter signup
//! and a contact form backed by Firestore or a local JSON store. This library
//! exposes the modules for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod carousel;
pub mod cli;
pub mod content;
pub mod error;
pub mod forms;
pub mod prelude;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;

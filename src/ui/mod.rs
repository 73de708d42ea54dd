//! UI module - the menu views and the strict rendering wrapper
//!
//! Views are plain functions returning an element tree. They hold no state
//! and never read the window; the host paints whatever they return.

pub mod components;
pub mod strict_mode;

pub use strict_mode::StrictMode;

//! Pizza Menu - a fixed catalog rendered into a native window

pub mod app;
pub mod catalog;
pub mod constants;
pub mod document;
pub mod dom;
pub mod entry;
pub mod settings;
pub mod theme;
pub mod types;
pub mod ui;
pub mod utils;

pub mod catalog;
pub mod config;
pub mod fretboard;
pub mod notename;
pub mod pattern;
pub mod selection;
pub mod util;

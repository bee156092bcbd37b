#![allow(clippy::new_without_default)]

pub mod document;
pub mod error;
pub mod loader;
pub mod playback;
pub mod season;
pub mod source;

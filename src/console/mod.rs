//! Console module
//!
//! Handles the line-oriented terminal interaction.
//!
//! # Components
//!
//! - `menu` - Fixed menu text, prompts, and choice parsing
//! - `session` - Interactive session driver over generic `BufRead`/`Write`

pub mod menu;
pub mod session;

pub use menu::{parse_choice, MenuChoice};
pub use session::Session;

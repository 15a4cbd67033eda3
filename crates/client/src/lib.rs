//! Client side of the todo service.
//!
//! - [`api::TodoApi`] -- thin HTTP client over the REST contract.
//! - [`view::TodoView`] -- list state plus the add/delete/toggle flows a
//!   front end drives.
//! - [`prompt::Prompt`] -- how the view talks to the user (alerts and
//!   confirmations), so terminals and tests can plug in their own.
//! - [`cli`] -- command parsing and rendering for the `todo-cli` binary.

pub mod api;
pub mod cli;
pub mod prompt;
pub mod view;

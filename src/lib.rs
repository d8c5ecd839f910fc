//! State and persistence core for a small to-do list widget.
//!
//! [`store::ItemStore`] owns the list and writes it through to a
//! [`storage::Storage`] slot after every mutation; [`view::project`] derives
//! the visible subset for a [`model::Filter`]; [`app::App`] bundles both with
//! the presentation state a renderer drives.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod storage;
pub mod store;
pub mod ui;
pub mod view;

pub use app::{App, AppEvent};
pub use model::{Filter, Item, ItemId, TodoList};
pub use store::{ItemStore, Mutation};

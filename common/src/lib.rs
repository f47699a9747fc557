//! firstapp Common Library
//!
//! CLIとWeb(WASM)で共有されるビュー木とレンダラ

pub mod node;
pub mod render;
pub mod views;
pub mod document;
pub mod error;

pub use node::{Element, Node, Tag};
pub use render::{render_html, render_pretty};
pub use views::{navigation_view, root_view, NavLink, APP_TITLE, NAV_LINKS, WELCOME_HEADING, WELCOME_TEXT};
pub use document::{Document, StyleSheet, DEFAULT_STYLESHEET};
pub use error::{Error, Result};

//! Browser and text helpers used by the widget panel.

pub mod embed;
pub mod linkify;

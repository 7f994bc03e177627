//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers and report
//! user intent upward through callbacks; none of them talk to the network.

pub mod book_form;
pub mod book_table;
pub mod navbar;

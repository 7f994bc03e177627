//! Networking modules for the remote books collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the four REST calls against the collaborator and `types`
//! defines the JSON schema exchanged with it.

pub mod api;
pub mod types;

//! Core request handling: events, arguments, session scopes, and the
//! handler contract.

pub mod args;
pub mod event;
pub mod handler;
pub mod state;

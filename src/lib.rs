//! A push-rendered card UI runtime hosting session-scoped request handlers.
//!
//! Each client round trip invokes the mounted [`lessons`] handler with the
//! caller's session scopes, the submitted arguments, and the client's
//! [`ui::Surface`]. Whatever the handler saves is pushed back as a diff.

pub mod app;
pub mod config;
pub mod lessons;
pub mod logging;
pub mod runtime;
pub mod ui;

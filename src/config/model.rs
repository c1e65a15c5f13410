//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the runtime works out of the box.

use crate::app::state::Scope;
use crate::lessons::LessonKind;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which handler is mounted, where, and which scope gates its first render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default = "default_lesson")]
    pub lesson: LessonKind,
    #[serde(default = "default_scope")]
    pub scope: Scope,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
            lesson: default_lesson(),
            scope: default_scope(),
        }
    }
}

/// Diagnostic log settings. Logs go to stderr; stdout is the push stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: false,
        }
    }
}

fn default_route() -> String {
    "/demo".to_string()
}
fn default_lesson() -> LessonKind {
    LessonKind::CreateOnce
}
fn default_scope() -> Scope {
    Scope::Client
}
fn default_level() -> String {
    "info".to_string()
}

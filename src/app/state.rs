use crate::app::event::{ClientId, UserId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifetime bucket for state that outlives a single round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// One browser tab / connection
    Client,
    /// Every connection of one user
    User,
    /// The whole process
    App,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InitState {
    Uninitialized,
    Initialized { at: DateTime<Local> },
}

/// What a handler may do with a scope: check or flip the first-render
/// marker.
pub trait SessionScope {
    /// When the scope's cards were first rendered, if they were.
    fn initialized_at(&self) -> Option<DateTime<Local>>;

    /// Moves the scope to `Initialized`. Returns `false` if it already was.
    fn mark_initialized(&mut self) -> bool;

    fn is_initialized(&self) -> bool {
        self.initialized_at().is_some()
    }
}

#[derive(Debug)]
pub struct SessionState {
    pub init: InitState,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            init: InitState::Uninitialized,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionScope for SessionState {
    fn initialized_at(&self) -> Option<DateTime<Local>> {
        match self.init {
            InitState::Uninitialized => None,
            InitState::Initialized { at } => Some(at),
        }
    }

    fn mark_initialized(&mut self) -> bool {
        if self.is_initialized() {
            return false;
        }
        self.init = InitState::Initialized { at: Local::now() };
        true
    }
}

/// The three scopes visible to one invocation, borrowed together.
pub struct Scopes<'a> {
    pub client: &'a mut SessionState,
    pub user: &'a mut SessionState,
    pub app: &'a mut SessionState,
}

/// All session state held by the runtime. Entries are created on first
/// access and live as long as their scope key does.
#[derive(Debug, Default)]
pub struct SessionStore {
    clients: HashMap<ClientId, SessionState>,
    users: HashMap<UserId, SessionState>,
    app: SessionState,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scopes(&mut self, client_id: &str, user_id: &str) -> Scopes<'_> {
        Scopes {
            client: self.clients.entry(client_id.to_string()).or_default(),
            user: self.users.entry(user_id.to_string()).or_default(),
            app: &mut self.app,
        }
    }

    pub fn client(&self, client_id: &str) -> Option<&SessionState> {
        self.clients.get(client_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&SessionState> {
        self.users.get(user_id)
    }

    pub fn app(&self) -> &SessionState {
        &self.app
    }

    /// Drops the client scope. User and app scopes are untouched.
    pub fn drop_client(&mut self, client_id: &str) -> bool {
        self.clients.remove(client_id).is_some()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

use crate::app::args::Arguments;
use crate::app::state::{Scope, SessionScope, Scopes};
use crate::ui::{Card, Page};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("card '{0}' is not on this page")]
    MissingCard(String),

    #[error("card '{name}' is not a {expected} card")]
    WrongCardKind { name: String, expected: &'static str },
}

/// Everything one invocation may touch.
pub struct Query<'a> {
    pub client: &'a mut dyn SessionScope,
    pub user: &'a mut dyn SessionScope,
    pub app: &'a mut dyn SessionScope,
    pub args: &'a dyn Arguments,
    pub page: &'a mut dyn Page,
}

impl<'a> Query<'a> {
    pub fn new(scopes: Scopes<'a>, args: &'a dyn Arguments, page: &'a mut dyn Page) -> Self {
        Self {
            client: scopes.client,
            user: scopes.user,
            app: scopes.app,
            args,
            page,
        }
    }

    pub fn scope(&mut self, scope: Scope) -> &mut dyn SessionScope {
        match scope {
            Scope::Client => &mut *self.client,
            Scope::User => &mut *self.user,
            Scope::App => &mut *self.app,
        }
    }

    /// The named card, which must exist and be a markdown card.
    pub fn markdown_content_mut(&mut self, name: &str) -> Result<&mut String, ServeError> {
        let card = self
            .page
            .card_mut(name)
            .ok_or_else(|| ServeError::MissingCard(name.to_string()))?;
        match card {
            Card::Markdown(md) => Ok(&mut md.content),
            _ => Err(ServeError::WrongCardKind {
                name: name.to_string(),
                expected: "markdown",
            }),
        }
    }
}

/// A request handler mounted on a route. Invoked once per client round trip.
pub trait Lesson: Send {
    fn name(&self) -> &'static str;
    fn serve(&self, q: &mut Query<'_>) -> Result<(), ServeError>;
}

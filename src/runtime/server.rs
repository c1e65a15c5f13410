use crate::app::event::{AppEvent, ClientId, Interaction};
use crate::app::handler::{Lesson, Query};
use crate::app::state::SessionStore;
use crate::config::RuntimeConfig;
use crate::lessons;
use crate::runtime::publisher::Publisher;
use crate::runtime::wire::{self, OutboundFrame};
use crate::ui::Surface;
use anyhow::{Context, Result};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Hosts one lesson on one route. Owns every client's surface and all
/// session scopes, and runs invocations one at a time.
pub struct Runtime<P: Publisher> {
    route: String,
    lesson: Box<dyn Lesson>,
    store: SessionStore,
    pages: HashMap<ClientId, Surface>,
    publisher: P,
    pub should_quit: bool,
    pub served: u64,
}

impl<P: Publisher> Runtime<P> {
    pub fn new(config: &RuntimeConfig, publisher: P) -> Self {
        let lesson = lessons::build_lesson(config.lesson, config.scope);
        info!(route = %config.route, lesson = lesson.name(), scope = ?config.scope, "mounted");
        Self::with_lesson(&config.route, lesson, publisher)
    }

    pub fn with_lesson(route: &str, lesson: Box<dyn Lesson>, publisher: P) -> Self {
        Self {
            route: route.to_string(),
            lesson,
            store: SessionStore::new(),
            pages: HashMap::new(),
            publisher,
            should_quit: false,
            served: 0,
        }
    }

    /// Applies one event. Only a failed push is returned; handler faults are
    /// logged and the runtime keeps going.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Interaction(interaction) => self.serve(interaction)?,
            AppEvent::ClientClosed { client_id } => {
                let had_scope = self.store.drop_client(&client_id);
                let had_page = self.pages.remove(&client_id).is_some();
                if had_scope || had_page {
                    info!(client = %client_id, "client closed");
                } else {
                    debug!(client = %client_id, "close for unknown client");
                }
            }
            AppEvent::Shutdown => {
                info!(served = self.served, "shutting down");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Runs the lesson for one interaction and pushes whatever it saved.
    ///
    /// A handler fault discards the unsaved ops and is logged. A failed push
    /// is an error: the scope already counts as rendered, so the client could
    /// never catch up.
    pub fn serve(&mut self, interaction: Interaction) -> Result<()> {
        let Interaction {
            client_id,
            user_id,
            args,
        } = interaction;
        let client_id = match client_id {
            Some(id) => id,
            None => self.assign_client_id(),
        };
        debug!(
            client = %client_id,
            user = %user_id,
            args = ?args.names().collect::<Vec<_>>(),
            "serving"
        );

        let page = self.pages.entry(client_id.clone()).or_default();
        let scopes = self.store.scopes(&client_id, &user_id);
        let mut q = Query::new(scopes, &args, &mut *page);

        if let Err(e) = self.lesson.serve(&mut q) {
            page.discard_pending();
            page.take_outbox();
            error!(
                client = %client_id,
                lesson = self.lesson.name(),
                route = %self.route,
                "invocation failed: {}",
                e
            );
            return Ok(());
        }

        for diff in page.take_outbox() {
            let frame = OutboundFrame::new(&client_id, &self.route, diff);
            self.publisher
                .publish(&frame)
                .with_context(|| format!("Failed to push to client {}", client_id))?;
        }
        self.served += 1;
        Ok(())
    }

    /// A fresh id no live client scope or page is using.
    fn assign_client_id(&self) -> ClientId {
        loop {
            let id = wire::generate_client_id();
            if self.store.client(&id).is_none() && !self.pages.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn page(&self, client_id: &str) -> Option<&Surface> {
        self.pages.get(client_id)
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}

/// Feeds events to the runtime until the channel closes or it asks to quit.
/// Stops at the first failed push.
pub async fn drive<P: Publisher>(
    runtime: &mut Runtime<P>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    while let Some(event) = event_rx.recv().await {
        runtime.handle_event(event)?;
        if runtime.should_quit {
            break;
        }
    }
    Ok(())
}

//! Create once, update afterwards.
//!
//! Cards are built on the first invocation seen by the configured scope and
//! only mutated from then on, so the client keeps the same instances (and
//! the user's typed input) across round trips. With `Scope::Client` that is
//! once per tab, `Scope::User` once per user, `Scope::App` once per process.

use super::{apply_trigger, hello_card, submit_form, trigger_form, TriggerMode, FORM, HELLO};
use crate::app::handler::{Lesson, Query, ServeError};
use crate::app::state::{Scope, SessionScope};
use crate::ui::Page;
use tracing::{debug, info};

pub struct CreateOnce {
    scope: Scope,
    mode: TriggerMode,
}

impl CreateOnce {
    pub fn new(scope: Scope, mode: TriggerMode) -> Self {
        Self { scope, mode }
    }

    fn init_cards(&self, q: &mut Query<'_>) {
        q.page.set_card(HELLO, hello_card());
        let form = match self.mode {
            TriggerMode::Submit => submit_form(),
            TriggerMode::OnChange => trigger_form(),
        };
        q.page.set_card(FORM, form);
    }
}

impl Lesson for CreateOnce {
    fn name(&self) -> &'static str {
        match self.mode {
            TriggerMode::Submit => "create_once",
            TriggerMode::OnChange => "create_once_trigger",
        }
    }

    fn serve(&self, q: &mut Query<'_>) -> Result<(), ServeError> {
        match q.scope(self.scope).initialized_at() {
            Some(at) => debug!(scope = ?self.scope, since = %at, "reusing cards"),
            None => {
                self.init_cards(q);
                q.scope(self.scope).mark_initialized();
                info!(scope = ?self.scope, "first render, cards created");
            }
        }

        let updated = apply_trigger(q, self.mode)?;
        debug!(scope = ?self.scope, updated, "create-once lesson served");

        q.page.save();
        Ok(())
    }
}

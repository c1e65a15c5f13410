//! Rebuilds both cards on every round trip and updates on an explicit submit.
//!
//! Because `hello` and `form` are replaced each time, the client gets fresh
//! instances and whatever the user typed into the textbox is gone after the
//! push.

use super::{apply_trigger, hello_card, submit_form, TriggerMode, FORM, HELLO};
use crate::app::handler::{Lesson, Query, ServeError};
use crate::ui::Page;
use tracing::debug;

pub struct SubmitLesson;

impl Lesson for SubmitLesson {
    fn name(&self) -> &'static str {
        "submit"
    }

    fn serve(&self, q: &mut Query<'_>) -> Result<(), ServeError> {
        q.page.set_card(HELLO, hello_card());
        q.page.set_card(FORM, submit_form());

        let updated = apply_trigger(q, TriggerMode::Submit)?;
        debug!(updated, "submit lesson served");

        q.page.save();
        Ok(())
    }
}

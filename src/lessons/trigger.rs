//! Same as the submit lesson but with a triggering textbox: a non-empty
//! `content` is itself the signal. Cards are still rebuilt every time.

use super::{apply_trigger, hello_card, trigger_form, TriggerMode, FORM, HELLO};
use crate::app::handler::{Lesson, Query, ServeError};
use crate::ui::Page;
use tracing::debug;

pub struct TriggerLesson;

impl Lesson for TriggerLesson {
    fn name(&self) -> &'static str {
        "trigger"
    }

    fn serve(&self, q: &mut Query<'_>) -> Result<(), ServeError> {
        q.page.set_card(HELLO, hello_card());
        q.page.set_card(FORM, trigger_form());

        let updated = apply_trigger(q, TriggerMode::OnChange)?;
        debug!(updated, "trigger lesson served");

        q.page.save();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::args::ArgumentSet;
    use crate::app::state::SessionStore;
    use crate::lessons::GREETING;
    use crate::ui::{Page, Surface};

    fn serve_content(content: &str) -> String {
        let mut store = SessionStore::new();
        let mut page = Surface::new();
        let args = ArgumentSet::from_pairs([("content", content)]);
        let mut q = Query::new(store.scopes("test_client", "test_user"), &args, &mut page);
        TriggerLesson.serve(&mut q).unwrap();
        page.card(HELLO)
            .and_then(|c| c.as_markdown())
            .map(|md| md.content.clone())
            .unwrap()
    }

    #[test]
    fn test_serve_with_content() {
        assert_eq!(serve_content("New Content"), "New Content");
    }

    #[test]
    fn test_serve_without_content() {
        assert_eq!(serve_content(""), GREETING);
    }

    #[test]
    fn test_form_is_triggering() {
        let mut store = SessionStore::new();
        let mut page = Surface::new();
        let args = ArgumentSet::new();
        let mut q = Query::new(store.scopes("c", "u"), &args, &mut page);
        TriggerLesson.serve(&mut q).unwrap();
        let form = page.card(FORM).and_then(|c| c.as_form()).unwrap();
        assert!(form.textbox("content").unwrap().trigger);
    }
}

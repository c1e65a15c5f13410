//! Request handlers mounted by the runtime.
//!
//! All of them render the same two cards: a `hello` markdown card and a
//! `form` card whose `content` value is copied into `hello` when the trigger
//! fires. They differ in when the cards get built and what counts as the
//! trigger.

pub mod create_once;
pub mod submit;
pub mod trigger;

pub use create_once::CreateOnce;

use crate::app::args::Arguments;
use crate::app::handler::{Lesson, Query, ServeError};
use crate::app::state::Scope;
use crate::ui::{self, Card};
use serde::{Deserialize, Serialize};

pub const HELLO: &str = "hello";
pub const FORM: &str = "form";
pub const CONTENT: &str = "content";
pub const SUBMIT: &str = "submit";

pub const GREETING: &str = "Hello World!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonKind {
    Submit,
    Trigger,
    CreateOnce,
    CreateOnceTrigger,
}

/// What makes an invocation apply its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// The `submit` button fired; `content` is copied as-is.
    Submit,
    /// `content` itself changed to a non-empty value.
    OnChange,
}

pub fn build_lesson(kind: LessonKind, scope: Scope) -> Box<dyn Lesson> {
    match kind {
        LessonKind::Submit => Box::new(submit::SubmitLesson),
        LessonKind::Trigger => Box::new(trigger::TriggerLesson),
        LessonKind::CreateOnce => Box::new(CreateOnce::new(scope, TriggerMode::Submit)),
        LessonKind::CreateOnceTrigger => Box::new(CreateOnce::new(scope, TriggerMode::OnChange)),
    }
}

pub(crate) fn hello_card() -> Card {
    ui::markdown_card("1 1 3 1", "Markdown card", GREETING)
}

pub(crate) fn submit_form() -> Card {
    ui::form_card(
        "1 2 3 3",
        vec![
            ui::textbox(CONTENT, "Content").into(),
            ui::button(SUBMIT, "Submit").into(),
        ],
    )
}

pub(crate) fn trigger_form() -> Card {
    ui::form_card("1 2 3 2", vec![ui::textbox(CONTENT, "Content").with_trigger().into()])
}

/// Copies `content` into the hello card if the trigger fired. Returns whether
/// it did.
pub(crate) fn apply_trigger(q: &mut Query<'_>, mode: TriggerMode) -> Result<bool, ServeError> {
    let fired = match mode {
        TriggerMode::Submit => q.args.is_set(SUBMIT),
        TriggerMode::OnChange => q.args.is_set(CONTENT),
    };
    if !fired {
        return Ok(false);
    }
    let value = q.args.text(CONTENT);
    *q.markdown_content_mut(HELLO)? = value;
    Ok(true)
}

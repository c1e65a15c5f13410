//! Card and component model.
//!
//! Only what the handlers need to build and mutate: markdown cards and forms
//! made of textboxes and buttons. Everything serializes to the push stream.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Card {
    Markdown(MarkdownCard),
    Form(FormCard),
}

impl Card {
    pub fn as_markdown(&self) -> Option<&MarkdownCard> {
        match self {
            Card::Markdown(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_markdown_mut(&mut self) -> Option<&mut MarkdownCard> {
        match self {
            Card::Markdown(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_form(&self) -> Option<&FormCard> {
        match self {
            Card::Form(card) => Some(card),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkdownCard {
    #[serde(rename = "box")]
    pub box_: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormCard {
    #[serde(rename = "box")]
    pub box_: String,
    pub items: Vec<Component>,
}

impl FormCard {
    pub fn textbox(&self, name: &str) -> Option<&Textbox> {
        self.items.iter().find_map(|item| match item {
            Component::Textbox(tb) if tb.name == name => Some(tb),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Textbox(Textbox),
    Button(Button),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Textbox(tb) => &tb.name,
            Component::Button(btn) => &btn.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Textbox {
    pub name: String,
    pub label: String,
    /// Submit on change instead of waiting for a button
    pub trigger: bool,
}

impl Textbox {
    pub fn with_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub name: String,
    pub label: String,
}

pub fn markdown_card(box_: &str, title: &str, content: &str) -> Card {
    Card::Markdown(MarkdownCard {
        box_: box_.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    })
}

pub fn form_card(box_: &str, items: Vec<Component>) -> Card {
    Card::Form(FormCard {
        box_: box_.to_string(),
        items,
    })
}

pub fn textbox(name: &str, label: &str) -> Textbox {
    Textbox {
        name: name.to_string(),
        label: label.to_string(),
        trigger: false,
    }
}

pub fn button(name: &str, label: &str) -> Button {
    Button {
        name: name.to_string(),
        label: label.to_string(),
    }
}

impl From<Textbox> for Component {
    fn from(tb: Textbox) -> Self {
        Component::Textbox(tb)
    }
}

impl From<Button> for Component {
    fn from(btn: Button) -> Self {
        Component::Button(btn)
    }
}

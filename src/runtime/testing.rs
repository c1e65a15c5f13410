//! In-memory stand-ins for the two ends of the push stream.

use crate::runtime::publisher::Publisher;
use crate::runtime::wire::OutboundFrame;
use crate::ui::{Card, CardId, CardOp};
use anyhow::Result;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
pub struct RecordingPublisher {
    pub frames: Vec<OutboundFrame>,
}

impl RecordingPublisher {
    pub fn frames_for<'a>(&'a self, client: &'a str) -> impl Iterator<Item = &'a OutboundFrame> {
        self.frames.iter().filter(move |f| f.client == client)
    }

    pub fn drain(&mut self) -> Vec<OutboundFrame> {
        std::mem::take(&mut self.frames)
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&mut self, frame: &OutboundFrame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// What a browser tab would show after applying pushes: the cards, plus any
/// text the user typed into form fields that the server has not replaced.
#[derive(Debug, Default)]
pub struct ClientView {
    cards: BTreeMap<String, (CardId, Card)>,
    typed: HashMap<(String, String), String>,
}

impl ClientView {
    pub fn apply(&mut self, frame: &OutboundFrame) {
        for op in &frame.ops {
            match op {
                CardOp::Put { name, id, card } => self.replace(name, *id, card.clone()),
                CardOp::Update { name, id, card } => {
                    let same = self.cards.get(name).map(|(cur, _)| cur == id).unwrap_or(false);
                    if same {
                        self.cards.insert(name.clone(), (*id, card.clone()));
                    } else {
                        self.replace(name, *id, card.clone());
                    }
                }
            }
        }
    }

    fn replace(&mut self, name: &str, id: CardId, card: Card) {
        self.typed.retain(|(card_name, _), _| card_name != name);
        self.cards.insert(name.to_string(), (id, card));
    }

    pub fn type_into(&mut self, card: &str, field: &str, text: &str) {
        self.typed
            .insert((card.to_string(), field.to_string()), text.to_string());
    }

    pub fn typed(&self, card: &str, field: &str) -> Option<&str> {
        self.typed
            .get(&(card.to_string(), field.to_string()))
            .map(String::as_str)
    }

    pub fn content(&self, card: &str) -> Option<&str> {
        self.cards
            .get(card)
            .and_then(|(_, c)| c.as_markdown())
            .map(|md| md.content.as_str())
    }
}

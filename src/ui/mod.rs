//! The UI surface: named cards held for one client, plus the diff of what
//! changed since the last push.

pub mod card;

pub use card::{button, form_card, markdown_card, textbox, Card, Component};

use serde::Serialize;
use std::collections::BTreeMap;

pub type CardId = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CardOp {
    /// A new card instance. The client throws away whatever it held for
    /// the old one, typed input included.
    Put { name: String, id: CardId, card: Card },
    /// The same instance with new content.
    Update { name: String, id: CardId, card: Card },
}

impl CardOp {
    pub fn name(&self) -> &str {
        match self {
            CardOp::Put { name, .. } | CardOp::Update { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDiff {
    pub seq: u64,
    pub ops: Vec<CardOp>,
}

/// The handler-facing side of a surface.
pub trait Page {
    fn card(&self, name: &str) -> Option<&Card>;

    /// Mutable access to an existing card. Marks it for an in-place update.
    fn card_mut(&mut self, name: &str) -> Option<&mut Card>;

    /// Creates or replaces a card, always under a fresh id.
    fn set_card(&mut self, name: &str, card: Card) -> CardId;

    /// Queues everything touched since the last save for pushing.
    fn save(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Put,
    Update,
}

#[derive(Debug)]
struct Slot {
    id: CardId,
    card: Card,
    pending: Option<Pending>,
}

#[derive(Debug, Default)]
pub struct Surface {
    slots: BTreeMap<String, Slot>,
    touched: Vec<String>,
    next_id: CardId,
    seq: u64,
    outbox: Vec<SurfaceDiff>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_id(&self, name: &str) -> Option<CardId> {
        self.slots.get(name).map(|slot| slot.id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Takes the diffs queued by `save` since the last drain.
    pub fn take_outbox(&mut self) -> Vec<SurfaceDiff> {
        std::mem::take(&mut self.outbox)
    }

    /// Forgets unsaved changes, keeping the cards themselves as they are.
    pub fn discard_pending(&mut self) {
        for name in self.touched.drain(..) {
            if let Some(slot) = self.slots.get_mut(&name) {
                slot.pending = None;
            }
        }
    }

    fn touch(&mut self, name: &str) {
        if !self.touched.iter().any(|n| n == name) {
            self.touched.push(name.to_string());
        }
    }
}

impl Page for Surface {
    fn card(&self, name: &str) -> Option<&Card> {
        self.slots.get(name).map(|slot| &slot.card)
    }

    fn card_mut(&mut self, name: &str) -> Option<&mut Card> {
        if !self.slots.contains_key(name) {
            return None;
        }
        self.touch(name);
        let slot = self.slots.get_mut(name)?;
        if slot.pending.is_none() {
            slot.pending = Some(Pending::Update);
        }
        Some(&mut slot.card)
    }

    fn set_card(&mut self, name: &str, card: Card) -> CardId {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.insert(
            name.to_string(),
            Slot {
                id,
                card,
                pending: Some(Pending::Put),
            },
        );
        self.touch(name);
        id
    }

    fn save(&mut self) {
        let mut ops = Vec::with_capacity(self.touched.len());
        for name in self.touched.drain(..) {
            let Some(slot) = self.slots.get_mut(&name) else {
                continue;
            };
            let op = match slot.pending.take() {
                Some(Pending::Put) => CardOp::Put {
                    name,
                    id: slot.id,
                    card: slot.card.clone(),
                },
                Some(Pending::Update) => CardOp::Update {
                    name,
                    id: slot.id,
                    card: slot.card.clone(),
                },
                None => continue,
            };
            ops.push(op);
        }
        self.seq += 1;
        self.outbox.push(SurfaceDiff { seq: self.seq, ops });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> Card {
        markdown_card("1 1 3 1", "Markdown card", "Hello World!")
    }

    #[test]
    fn test_set_card_allocates_fresh_ids() {
        let mut page = Surface::new();
        let a = page.set_card("hello", hello());
        let b = page.set_card("hello", hello());
        assert_ne!(a, b);
        assert_eq!(page.card_id("hello"), Some(b));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_mutation_keeps_identity() {
        let mut page = Surface::new();
        let id = page.set_card("hello", hello());
        page.save();
        page.card_mut("hello")
            .and_then(Card::as_markdown_mut)
            .unwrap()
            .content = "abc".into();
        page.save();

        assert_eq!(page.card_id("hello"), Some(id));
        let diffs = page.take_outbox();
        assert_eq!(diffs.len(), 2);
        assert!(matches!(&diffs[0].ops[..], [CardOp::Put { id: i, .. }] if *i == id));
        match &diffs[1].ops[..] {
            [CardOp::Update { id: i, card, .. }] => {
                assert_eq!(*i, id);
                assert_eq!(card.as_markdown().unwrap().content, "abc");
            }
            other => panic!("unexpected ops: {:?}", other),
        }
        assert_eq!(diffs[1].seq, 2);
    }

    #[test]
    fn test_put_then_mutate_before_save_is_one_put() {
        let mut page = Surface::new();
        page.set_card("hello", hello());
        page.card_mut("hello")
            .and_then(Card::as_markdown_mut)
            .unwrap()
            .content = "changed".into();
        page.save();
        let diffs = page.take_outbox();
        match &diffs[0].ops[..] {
            [CardOp::Put { card, .. }] => {
                assert_eq!(card.as_markdown().unwrap().content, "changed")
            }
            other => panic!("unexpected ops: {:?}", other),
        }
    }

    #[test]
    fn test_save_without_changes_pushes_empty_diff() {
        let mut page = Surface::new();
        page.set_card("hello", hello());
        page.save();
        page.take_outbox();
        page.save();
        let diffs = page.take_outbox();
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].ops.is_empty());
    }

    #[test]
    fn test_missing_card_is_none() {
        let mut page = Surface::new();
        assert!(page.card_mut("hello").is_none());
        page.save();
        assert!(page.take_outbox()[0].ops.is_empty());
    }

    #[test]
    fn test_discard_pending_drops_unsaved_ops() {
        let mut page = Surface::new();
        page.set_card("hello", hello());
        page.discard_pending();
        page.save();
        assert!(page.take_outbox()[0].ops.is_empty());
        assert!(page.card("hello").is_some());
    }
}

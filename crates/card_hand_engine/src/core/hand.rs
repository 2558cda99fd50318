//! Geordnete Kartensammlung mit lückenlosen Slot-Indizes.

use super::card::{CardHandle, CardProxy};

/// Container für alle Karten der Hand in Anzeigereihenfolge.
///
/// Nach jeder strukturellen Änderung gilt: `cards[i].slot_index == i`.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<CardProxy>,
}

impl Hand {
    /// Erstellt eine leere Hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Gibt die Anzahl der Karten zurück.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Gibt `true` zurück, wenn keine Karten in der Hand sind.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardProxy> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardProxy> {
        self.cards.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardProxy> {
        self.cards.iter_mut()
    }

    /// Sucht den Slot-Index zu einem Host-Handle.
    pub fn index_of(&self, handle: CardHandle) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.handle == handle)
    }

    /// Hängt eine Karte ans Ende an und gibt ihren Slot-Index zurück.
    pub fn push(&mut self, handle: CardHandle) -> usize {
        let index = self.cards.len();
        self.cards.push(CardProxy::new(handle, index));
        self.restamp_slot_indices();
        index
    }

    /// Entfernt die Karte an `index`; nachfolgende Karten rücken auf.
    pub fn remove(&mut self, index: usize) -> Option<CardProxy> {
        if index >= self.cards.len() {
            return None;
        }
        let removed = self.cards.remove(index);
        self.restamp_slot_indices();
        Some(removed)
    }

    /// Slot-Indizes in Sammlungsreihenfolge.
    pub fn slot_indices(&self) -> Vec<usize> {
        self.cards.iter().map(|card| card.slot_index).collect()
    }

    /// Host-Handles in Sammlungsreihenfolge.
    pub fn handles(&self) -> Vec<CardHandle> {
        self.cards.iter().map(|card| card.handle).collect()
    }

    fn restamp_slot_indices(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.slot_index = index;
        }
    }
}

//! Karten-Proxy: Verwaltungsdaten einer Karte in der Hand.

/// Opaker Verweis auf das Host-Objekt einer Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle(pub u64);

/// Eine Karte in der Hand.
///
/// `slot_index` wird ausschließlich von [`super::Hand`] geschrieben und
/// entspricht immer der Position in der geordneten Sammlung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProxy {
    pub(crate) handle: CardHandle,
    pub(crate) slot_index: usize,
    pub(crate) in_drag: bool,
}

impl CardProxy {
    pub(crate) fn new(handle: CardHandle, slot_index: usize) -> Self {
        Self {
            handle,
            slot_index,
            in_drag: false,
        }
    }

    /// Host-Handle der Karte.
    pub fn handle(&self) -> CardHandle {
        self.handle
    }

    /// Aktuelle Position in der Hand (0-basiert, lückenlos).
    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    /// `true`, solange die Karte vom Zeiger gehalten wird.
    pub fn in_drag(&self) -> bool {
        self.in_drag
    }
}

use glam::Vec3;

/// Zeiger-bezogener Interaktionszustand
///
/// `Idle`, `Selecting` und `Dragging` ergeben sich implizit aus den beiden
/// Indizes: nichts gesetzt, nur `selected` gesetzt, beide gesetzt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Slot-Index der Karte, die dem Zeiger am nächsten ist
    pub selected: Option<usize>,
    /// Slot-Index der Karte, die vom Zeiger gehalten wird
    pub dragged: Option<usize>,
    /// Letzte Zeigerposition auf der Referenzebene
    pub pointer_world: Vec3,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade eine Karte gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// `true`, wenn die Karte an `index` gehovert, aber nicht gezogen wird.
    pub fn is_hovered(&self, index: usize) -> bool {
        self.selected == Some(index) && self.dragged != Some(index)
    }

    /// Setzt Selektion und Drag zurück.
    pub fn clear(&mut self) {
        self.selected = None;
        self.dragged = None;
    }
}

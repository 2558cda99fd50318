use crate::app::CommandLog;
use crate::core::{Hand, HandAnchor, HandCurve, Plane};
use crate::shared::HandOptions;

use super::InteractionState;

/// Hauptzustand einer Hand
///
/// Wird exklusiv vom Aufrufer gehalten und pro Tick per `&mut` an den
/// [`crate::HandController`] übergeben.
pub struct HandState {
    /// Karten in Anzeigereihenfolge
    pub hand: Hand,
    /// Selektion, Drag und Zeigerposition
    pub interaction: InteractionState,
    /// Transform, an dem die Hand hängt
    pub anchor: HandAnchor,
    /// Aus Anker und Optionen abgeleitete Kurve
    pub curve: HandCurve,
    /// Ebene für die Zeiger-Projektion
    pub reference_plane: Plane,
    /// Laufzeit-Optionen
    pub options: HandOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl HandState {
    /// Erstellt eine leere Hand und leitet Kurve und Referenzebene ab.
    pub fn new(anchor: HandAnchor, options: HandOptions) -> Self {
        let curve = HandCurve::from_anchor(&anchor, options.curve_start, options.curve_end);
        Self {
            hand: Hand::new(),
            interaction: InteractionState::new(),
            anchor,
            curve,
            reference_plane: anchor.reference_plane(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Karten zurück (für UI-Anzeige)
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Leitet Kurve und Referenzebene nach Anker- oder Optionsänderung neu ab.
    pub fn rebuild_geometry(&mut self) {
        self.curve = HandCurve::from_anchor(
            &self.anchor,
            self.options.curve_start,
            self.options.curve_end,
        );
        self.reference_plane = self.anchor.reference_plane();
    }
}

impl Default for HandState {
    fn default() -> Self {
        Self::new(HandAnchor::default(), HandOptions::default())
    }
}

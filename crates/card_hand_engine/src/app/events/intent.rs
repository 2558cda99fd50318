use crate::core::HandAnchor;
use crate::shared::HandOptions;

/// Hand-Intents.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum HandIntent {
    /// Zeiger wurde auf die Referenzebene projiziert
    PointerProjected { world_pos: glam::Vec3 },
    /// Zeiger-Strahl trifft das Hit-Volumen einer Karte
    CardHovered {
        slot_index: usize,
        primary_down: bool,
    },
    /// Primärtaste losgelassen
    PrimaryReleased,
    /// Neue Karte in die Hand ziehen
    DrawCardRequested,
    /// Gezogene Karte ausspielen
    PlayCardRequested,
    /// Anker wurde bewegt
    AnchorMoved { anchor: HandAnchor },
    /// Optionen übernehmen
    OptionsChanged { options: Box<HandOptions> },
}

use crate::core::HandAnchor;
use crate::shared::HandOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum HandCommand {
    /// Zeigerposition auf der Referenzebene setzen
    SetPointerWorld { world_pos: glam::Vec3 },
    /// Karte als gehovert markieren
    SelectCard { index: usize },
    /// Drag der selektierten Karte beginnen
    BeginDrag { index: usize },
    /// Drag beenden, Karte ggf. ausspielen
    ReleaseDrag,
    /// Neue Karte ans Ende der Hand anhängen
    DrawCard,
    /// Gezogene und selektierte Karte aus der Hand entfernen
    PlayCard,
    /// Anker setzen und Kurve neu ableiten
    SetAnchor { anchor: HandAnchor },
    /// Optionen setzen und Kurve neu ableiten
    ApplyOptions { options: Box<HandOptions> },
}

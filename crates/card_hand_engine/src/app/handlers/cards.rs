//! Handler für Ziehen und Ausspielen von Karten.

use crate::app::HandState;
use crate::host::HandHost;

/// Instanziiert eine Karte und hängt sie ans Ende der Hand.
pub fn draw<H: HandHost>(state: &mut HandState, host: &mut H) {
    let handle = host.spawn_card();
    let index = state.hand.push(handle);
    log::info!(
        "Karte {:?} gezogen (Slot {}, {} Karten in der Hand)",
        handle,
        index,
        state.hand.len()
    );
}

/// Entfernt die gezogene Karte aus der Hand und zerstört ihr Host-Objekt.
///
/// Ohne gleichzeitig gezogene und selektierte Karte passiert nichts.
pub fn play<H: HandHost>(state: &mut HandState, host: &mut H) {
    let (Some(dragged), Some(_)) = (state.interaction.dragged, state.interaction.selected) else {
        log::debug!("Ausspielen abgelehnt: keine gezogene und selektierte Karte");
        return;
    };

    let Some(card) = state.hand.remove(dragged) else {
        log::warn!("Ausspielen abgelehnt: Slot {} existiert nicht", dragged);
        state.interaction.clear();
        return;
    };

    host.destroy_card(card.handle());
    state.interaction.clear();
    log::info!(
        "Karte {:?} aus Slot {} ausgespielt ({} Karten verbleiben)",
        card.handle(),
        dragged,
        state.hand.len()
    );
}

//! Handler für Zeiger-Interaktion: Hover, Drag-Start und Loslassen.

use crate::app::HandState;
use crate::core::{FORWARD, Ray};
use crate::host::{HandHost, RayQuery};

/// Speichert die auf die Referenzebene projizierte Zeigerposition.
pub fn set_pointer_world(state: &mut HandState, world_pos: glam::Vec3) {
    state.interaction.pointer_world = world_pos;
}

/// Markiert die Karte an `index` als selektiert.
pub fn select(state: &mut HandState, index: usize) {
    if index >= state.hand.len() {
        log::debug!("Selektion ignoriert: Slot {} außerhalb der Hand", index);
        return;
    }
    if state.interaction.selected != Some(index) {
        log::trace!("Slot {} selektiert", index);
    }
    state.interaction.selected = Some(index);
}

/// Beginnt einen Drag; nur die aktuell selektierte Karte kann gezogen werden.
pub fn begin_drag(state: &mut HandState, index: usize) {
    if state.interaction.selected != Some(index) {
        log::debug!("Drag ignoriert: Slot {} ist nicht selektiert", index);
        return;
    }
    if state.interaction.dragged.is_none() {
        log::debug!("Drag von Slot {} begonnen", index);
    }
    state.interaction.dragged = Some(index);
}

/// Beendet den Drag.
///
/// Trifft ein frischer Vorwärts-Strahl von der gezogenen Karte nichts mehr,
/// hat sie die Hand verlassen und wird ausgespielt. Der Drag-Index wird in
/// jedem Fall zurückgesetzt.
pub fn release<H: HandHost>(state: &mut HandState, host: &mut H) {
    let Some(dragged) = state.interaction.dragged else {
        return;
    };

    let left_hand = state
        .hand
        .get(dragged)
        .map(|card| card.handle())
        .and_then(|handle| {
            let origin = host.card_pose(handle)?.position;
            let query = RayQuery::new(Ray::new(origin, FORWARD), state.options.release_ray_length)
                .excluding(handle);
            Some(host.raycast(&query).is_none())
        })
        .unwrap_or(false);

    if left_hand {
        super::cards::play(state, host);
    } else {
        log::debug!("Slot {} losgelassen, Karte bleibt in der Hand", dragged);
    }

    state.interaction.dragged = None;
}

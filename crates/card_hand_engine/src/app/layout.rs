//! Pro-Tick-Layout: berechnet für jede Karte Pose und Drag-Flag.
//!
//! Die Berechnung ist rein (`compute_card_pose`); `update_card_poses`
//! schreibt das Ergebnis in Host und Hand.

use glam::Quat;

use super::{HandState, InteractionState};
use crate::core::{FORWARD, HandCurve, Pose, look_rotation, rotate_towards};
use crate::host::HandHost;
use crate::shared::{HandOptions, SELECTION_SPREAD_STEP};

/// Read-only Eingaben für die Posenberechnung eines Ticks.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub curve: &'a HandCurve,
    /// z-Koordinate des Hand-Ankers (Basis der Tiefenstaffelung)
    pub anchor_z: f32,
    pub interaction: &'a InteractionState,
    pub options: &'a HandOptions,
}

/// Ergebnis der Posenberechnung einer Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Kurvenparameter nach Auffächerung und Klemmung
    pub t: f32,
    pub pose: Pose,
    pub in_drag: bool,
}

/// Versatz auf `t`, der Nachbarn von der selektierten Karte wegschiebt.
///
/// Direkte Nachbarn werden um `SELECTION_SPREAD_STEP * spacing` verschoben,
/// entferntere Karten linear weniger. Ohne Selektion oder mit
/// `spacing == 0` ist der Versatz null.
pub fn selection_spread(index: usize, count: usize, selected: Option<usize>, spacing: f32) -> f32 {
    let Some(selected) = selected else {
        return 0.0;
    };
    if index == selected || count == 0 {
        return 0.0;
    }
    let distance = index.abs_diff(selected) as f32;
    let falloff = (1.0 - (distance - 1.0) * 3.0 / count as f32).clamp(0.0, 1.0);
    let direction = if index > selected { 1.0 } else { -1.0 };
    SELECTION_SPREAD_STEP * spacing * falloff * direction
}

/// Kurvenparameter für Slot `index` von `count`: Karten mittig in gleichen Abständen.
///
/// `count` muss größer als null sein.
pub fn slot_parameter(index: usize, count: usize, selected: Option<usize>, spacing: f32) -> f32 {
    let base = (index as f32 + 0.5) / count as f32;
    (base + selection_spread(index, count, selected, spacing)).clamp(0.0, 1.0)
}

/// Berechnet die Zielpose der Karte an `index` ausgehend von ihrer aktuellen Pose.
pub fn compute_card_pose(
    ctx: &LayoutContext<'_>,
    index: usize,
    count: usize,
    current: Pose,
    delta_time: f32,
) -> CardPlacement {
    let t = slot_parameter(
        index,
        count,
        ctx.interaction.selected,
        ctx.options.selection_spacing,
    );

    if ctx.interaction.dragged == Some(index) {
        return CardPlacement {
            t,
            pose: Pose::new(ctx.interaction.pointer_world, Quat::IDENTITY),
            in_drag: true,
        };
    }

    let target = look_rotation(FORWARD, ctx.curve.normal(t));
    let rotation = rotate_towards(
        current.rotation,
        target,
        ctx.options.max_rotation_step(delta_time),
    );

    // Anhebung entlang der Hochachse vor dem Drehschritt dieses Ticks
    let mut position = ctx.curve.point(t) + current.up() * ctx.options.card_lift;
    // Sortierung: gehoverte Karte nach vorn, Rest gestaffelt nach hinten
    position.z = if ctx.interaction.is_hovered(index) {
        ctx.anchor_z - ctx.options.hover_depth_offset
    } else {
        ctx.anchor_z + t * ctx.options.stack_depth_scale
    };

    CardPlacement {
        t,
        pose: Pose::new(position, rotation),
        in_drag: false,
    }
}

/// Wendet das Layout auf alle Karten der Hand an.
///
/// Eine leere Hand wird übersprungen.
pub fn update_card_poses<H: HandHost>(state: &mut HandState, host: &mut H, delta_time: f32) {
    let count = state.hand.len();
    if count == 0 {
        return;
    }

    let HandState {
        hand,
        interaction,
        anchor,
        curve,
        options,
        ..
    } = state;
    let ctx = LayoutContext {
        curve,
        anchor_z: anchor.position().z,
        interaction,
        options,
    };

    for (index, card) in hand.iter_mut().enumerate() {
        let current = host.card_pose(card.handle).unwrap_or_default();
        let placement = compute_card_pose(&ctx, index, count, current, delta_time);
        host.set_card_pose(card.handle, placement.pose);
        card.in_drag = placement.in_drag;
    }

    log::trace!("Layout für {} Karten aktualisiert", count);
}

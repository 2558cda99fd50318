//! Hand-Controller für die Tick-Verarbeitung.

use super::layout;
use super::{HandCommand, HandIntent, HandState};
use crate::core::Ray;
use crate::host::{HandHost, PointerState, RayQuery};

/// Orchestriert Zeiger-Eingaben, Layout und Handler auf dem HandState.
#[derive(Default)]
pub struct HandController;

impl HandController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen Frame aus.
    ///
    /// Reihenfolge: Zeiger projizieren → Layout → Hit-Test und Tasten →
    /// Zieh-/Ausspiel-Auslöser. Alle Entscheidungen eines Ticks sehen damit
    /// denselben, bereits platzierten Kartenstand.
    pub fn tick<H: HandHost>(
        &mut self,
        state: &mut HandState,
        host: &mut H,
        delta_time: f32,
        pointer: &PointerState,
    ) -> anyhow::Result<()> {
        let pointer_ray = pointer
            .screen_pos
            .map(|screen_pos| host.pointer_ray(screen_pos));

        if let Some(world_pos) = pointer_ray
            .as_ref()
            .and_then(|ray| state.reference_plane.intersect_ray(ray))
        {
            self.handle_intent(state, host, HandIntent::PointerProjected { world_pos })?;
        }

        layout::update_card_poses(state, host, delta_time);

        let hovered = match pointer_ray {
            Some(ray) => hovered_slot(state, host, ray),
            None => None,
        };
        if let Some(slot_index) = hovered {
            self.handle_intent(
                state,
                host,
                HandIntent::CardHovered {
                    slot_index,
                    primary_down: pointer.primary_down,
                },
            )?;
        }

        if pointer.primary_released {
            self.handle_intent(state, host, HandIntent::PrimaryReleased)?;
        }
        if pointer.draw_pressed {
            self.handle_intent(state, host, HandIntent::DrawCardRequested)?;
        }
        if pointer.play_pressed {
            self.handle_intent(state, host, HandIntent::PlayCardRequested)?;
        }

        Ok(())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<H: HandHost>(
        &mut self,
        state: &mut HandState,
        host: &mut H,
        intent: HandIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem HandState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<H: HandHost>(
        &mut self,
        state: &mut HandState,
        host: &mut H,
        command: HandCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            HandCommand::SetPointerWorld { world_pos } => {
                handlers::pointer::set_pointer_world(state, world_pos)
            }
            HandCommand::SelectCard { index } => handlers::pointer::select(state, index),
            HandCommand::BeginDrag { index } => handlers::pointer::begin_drag(state, index),
            HandCommand::ReleaseDrag => handlers::pointer::release(state, host),

            // === Karten ===
            HandCommand::DrawCard => handlers::cards::draw(state, host),
            HandCommand::PlayCard => handlers::cards::play(state, host),

            // === Konfiguration ===
            HandCommand::SetAnchor { anchor } => handlers::config::set_anchor(state, anchor),
            HandCommand::ApplyOptions { options } => {
                handlers::config::apply_options(state, host, *options)?
            }
        }

        Ok(())
    }
}

/// Slot-Index der Karte, deren Hit-Volumen der Zeiger-Strahl zuerst trifft.
fn hovered_slot<H: HandHost>(state: &HandState, host: &H, ray: Ray) -> Option<usize> {
    let hit = host.raycast(&RayQuery::new(ray, state.options.pointer_ray_length))?;
    let handle = hit.target.card()?;
    state.hand.index_of(handle)
}

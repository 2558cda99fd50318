//! Mapping von Host-Intents auf mutierende Hand-Commands.

use super::{HandCommand, HandIntent, HandState};

/// Übersetzt einen `HandIntent` in eine Sequenz ausführbarer `HandCommand`s.
pub fn map_intent_to_commands(state: &HandState, intent: HandIntent) -> Vec<HandCommand> {
    match intent {
        HandIntent::PointerProjected { world_pos } => {
            vec![HandCommand::SetPointerWorld { world_pos }]
        }
        HandIntent::CardHovered {
            slot_index,
            primary_down,
        } => {
            // Während eines Drags bleibt die Selektion eingefroren
            if state.interaction.is_dragging() {
                return Vec::new();
            }

            let mut commands = vec![HandCommand::SelectCard { index: slot_index }];
            if primary_down {
                commands.push(HandCommand::BeginDrag { index: slot_index });
            }
            commands
        }
        HandIntent::PrimaryReleased => {
            if state.interaction.is_dragging() {
                vec![HandCommand::ReleaseDrag]
            } else {
                Vec::new()
            }
        }
        HandIntent::DrawCardRequested => vec![HandCommand::DrawCard],
        HandIntent::PlayCardRequested => vec![HandCommand::PlayCard],
        HandIntent::AnchorMoved { anchor } => vec![HandCommand::SetAnchor { anchor }],
        HandIntent::OptionsChanged { options } => vec![HandCommand::ApplyOptions { options }],
    }
}

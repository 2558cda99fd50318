mod hand_state;
mod interaction;

pub use hand_state::HandState;
pub use interaction::InteractionState;

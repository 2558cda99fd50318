//! Handler für Anker- und Optionsänderungen.

use crate::app::HandState;
use crate::core::HandAnchor;
use crate::host::HandHost;
use crate::shared::HandOptions;

/// Setzt einen neuen Anker und leitet Kurve und Referenzebene neu ab.
pub fn set_anchor(state: &mut HandState, anchor: HandAnchor) {
    state.anchor = anchor;
    state.rebuild_geometry();
    log::debug!("Hand-Anker nach {:?} verschoben", anchor.position());
}

/// Übernimmt neue Optionen und reicht die Kartengröße an den Host weiter.
///
/// Ungültige Optionen werden abgelehnt; der bisherige Stand bleibt erhalten.
pub fn apply_options<H: HandHost>(
    state: &mut HandState,
    host: &mut H,
    options: HandOptions,
) -> anyhow::Result<()> {
    options.validate()?;
    host.set_card_size(options.card_size);
    state.options = options;
    state.rebuild_geometry();
    log::info!("Hand-Optionen übernommen");
    Ok(())
}

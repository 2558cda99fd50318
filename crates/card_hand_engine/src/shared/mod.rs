//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die `app`, `host` und der Viewer gemeinsam lesen.

pub mod options;

pub use options::HandOptions;
pub use options::SELECTION_SPREAD_STEP;

//! Snapshot import/export: the one I/O-adjacent surface the core exposes
//! (spec §6). Everything else — HTTP, persistence, UI — lives outside this
//! crate and only calls through `export_state`/`import_state`.

pub mod snapshot;

pub use snapshot::{export_state, import_state};

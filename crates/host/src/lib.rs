//! # sheetsync-host
//!
//! Host-side collaborators around the sync pipeline: string-keyed property
//! stores, date arithmetic, and alert delivery through an optional
//! interactive surface.

pub mod props;
pub mod time;
pub mod ui;

pub use props::{FileProperties, MemoryProperties, PropertyStore};
pub use time::date_with_delta_days;
pub use ui::{alert, AlertSurface, RecordingUi};

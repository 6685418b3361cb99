//! Turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (context manager,
//! classifier or dispatcher). It exists solely for observability.
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (utterances, entities, names).
//! Only intent ids, context tags, languages and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

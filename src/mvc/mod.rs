//! Replicated models and their controllers.
//!
//! # Models
//!
//! A model is a named, ordered set of observable properties backed by one
//! document in the models collection. Opening a model loads that document
//! (or seeds it from the schema defaults) before the model is handed out,
//! so nothing can observe a half-loaded model.
//!
//! Every property change goes through a single set operation with three
//! modes:
//!
//! - `Replicate`: a local edit. Emits `Changed`, persists the new value and
//!   emits `SendSync` so other workers apply it.
//! - `Observe`: a value that arrived from another worker. Emits `Changed`
//!   only; the originating worker already persisted it.
//! - `Silent`: used while loading from storage.
//!
//! Setting a property to its current value is a no-op in every mode, which
//! makes replays of the same sync record harmless.
//!
//! # Controllers
//!
//! A `ViewController` exposes one model to hub clients, applying the
//! model's `ModelBehavior` validators. Members whose name starts or ends
//! with `_` (or contains one) are private and never leave the worker.
//!
//! `LogicSet` owns the controllers of a worker and wires them to the view
//! hub and the event bus.

pub mod enums;
pub mod structs;
pub mod impls;
pub mod traits;

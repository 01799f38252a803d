//! Gosling - signal dispatch for model/view/controller participants
//!
//! Views, controllers and models raise signals by name; each participant owns a
//! registry mapping operation names (ignoring case) to receivers, and dispatch is
//! a direct, synchronous call followed by the participant's update hook.
//!
//! Around that core:
//! - [`Mailbox`]/[`Poster`] carry envelopes from worker threads to the owning thread.
//! - [`AppContext`] holds configuration, participant names and strings, and shuts
//!   everything down in one place.
//! - [`Catalog`] builds menu items and tools from stable ids.
//! - [`geometry`] has the tile-space types used by drag and collision handling.
//!
//! See `demos/editor.rs`.

mod catalog;
mod config;
mod context;
mod dispatch;
mod envelope;
mod error;
mod factory;
mod mailbox;
mod meta;
mod operation;
mod origin;
mod participant;
mod payload;
mod receiver;
mod registry;

pub mod geometry;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use catalog::Catalog;
pub use config::Config;
pub use context::AppContext;
pub use dispatch::Dispatcher;
pub use envelope::Envelope;
pub use error::Error;
pub use factory::{create_event, create_event_with_payload};
pub use mailbox::{Mailbox, Poster, mailbox};
pub use meta::Meta;
pub use operation::{Operation, OperationName};
pub use origin::Origin;
pub use participant::{Participant, ParticipantId, Role};
pub use payload::{Payload, UidSet};
pub use receiver::Receiver;
pub use registry::Registry;

#[cfg(feature = "macros")]
pub use gosling_macros::{Operation, Payload};

pub use uuid::Uuid;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type EnvelopeId = u128;

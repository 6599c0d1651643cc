//! Event-level building blocks for Nova simulations.
//!
//! - [`EventSampler`]: area-uniform point sampling inside the disk slab,
//!   shared by supernova placement and civilization emergence.
//! - [`BubbleStamper`]: bounded-window hit-count update around one event.
//! - [`CivilizationRegistry`]: append-only population with one-way
//!   extinction.
//!
//! None of these own a random source. Callers pass their own generator
//! by `&mut`, which keeps every draw on a single deterministic stream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod civilization;
pub mod sampler;
pub mod stamp;

pub use civilization::{Civilization, CivilizationRegistry};
pub use sampler::EventSampler;
pub use stamp::{BubbleStamper, StampReport};

//! Domain models for the pathway service.

pub mod list_patch;
pub mod segment;

pub use list_patch::{Insertion, ListPatch, PatchError, PatchKey};
pub use segment::{Segment, SegmentType};

//! Draw-request generation
//!
//! The GPU backend is an external collaborator. Each frame the simulation
//! hands it a flat list of rectangle instances and retains nothing.

pub mod frame;

pub use frame::{RectInstance, build_frame};

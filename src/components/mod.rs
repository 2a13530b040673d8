//! ECS components.
//!
//! Submodules overview
//! - [`anchor`] – anchor-relative box placement for draw calls
//! - [`circlecollider`] – circle-vs-chunk collision participant
//! - [`inputcontrolled`] – keyboard-driven movement and camera following
//! - [`kinematicchain`] – bone arena for the kinematics demo
//! - [`lifetime`] – timed despawn for particles and popups
//! - [`mapposition`] / [`screenposition`] – world-space vs fixed-UI placement
//! - [`particle`] – burst particle with its own integration rules
//! - [`rigidbody`] – velocity plus per-frame damping
//! - [`shape`] – drawable primitive with anchor and color
//! - [`target`] – aim-trainer target aging toward expiry
//! - [`trace`] – polyline trail left by a chain tip
//! - [`zindex`] – painter's-algorithm draw ordering

pub mod anchor;
pub mod circlecollider;
pub mod inputcontrolled;
pub mod kinematicchain;
pub mod lifetime;
pub mod mapposition;
pub mod particle;
pub mod rigidbody;
pub mod screenposition;
pub mod shape;
pub mod target;
pub mod trace;
pub mod zindex;

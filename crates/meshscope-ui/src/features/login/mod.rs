//! Login flow feature wiring.
//!
//! # Design
//! - Form state changes only through [`state::transition`]; the view is a projection.
//! - Session state is read through a snapshot and changed only via [`controller::SessionDispatch`].
//! - Restrict HTTP access to the app layer so everything here runs natively in tests.

pub mod actions;
pub mod controller;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

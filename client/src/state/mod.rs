//! Client-side UI state.
//!
//! DESIGN
//! ======
//! The page has a single piece of mutable state, the mobile menu. It is kept
//! as a plain value type so transitions are testable without a reactive
//! runtime; the page shell wraps it in an `RwSignal` and provides it via
//! context.

pub mod menu;

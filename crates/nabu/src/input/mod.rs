//! Input side of the bridge.
//!
//! Pure, stateless translation from the host keyboard vocabulary
//! (`winit::keyboard::KeyCode`) into the toolkit's key identifiers and
//! modifier bitmask. No winit event plumbing lives here; the host's loop
//! polls its own events and calls these functions per event.

mod key;
mod modifiers;

pub use key::{KeyIdentifier, translate_key};
pub use modifiers::{KeyModifiers, compute_modifier_mask};

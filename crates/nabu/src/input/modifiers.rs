use bitflags::bitflags;
use winit::keyboard::KeyCode;

bitflags! {
    /// Toolkit modifier bitmask.
    ///
    /// Recomputed fresh for every translated input event; never cached.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL        = 1 << 0;
        const SHIFT       = 1 << 1;
        const ALT         = 1 << 2;
        const META        = 1 << 3;
        const CAPS_LOCK   = 1 << 4;
        const NUM_LOCK    = 1 << 5;
        const SCROLL_LOCK = 1 << 6;
    }
}

/// Samples the live down-state of every modifier key and composes the mask.
///
/// `is_down` is the host's key-state query. Paired modifiers set their bit
/// when either side is held. Pure: the same query yields the same mask
/// regardless of the order keys were pressed in.
pub fn compute_modifier_mask(is_down: impl Fn(KeyCode) -> bool) -> KeyModifiers {
    let either = |a: KeyCode, b: KeyCode| is_down(a) || is_down(b);

    let mut mask = KeyModifiers::empty();
    if either(KeyCode::ControlLeft, KeyCode::ControlRight) {
        mask |= KeyModifiers::CTRL;
    }
    if either(KeyCode::ShiftLeft, KeyCode::ShiftRight) {
        mask |= KeyModifiers::SHIFT;
    }
    if either(KeyCode::AltLeft, KeyCode::AltRight) {
        mask |= KeyModifiers::ALT;
    }
    if either(KeyCode::SuperLeft, KeyCode::SuperRight) {
        mask |= KeyModifiers::META;
    }
    if is_down(KeyCode::CapsLock) {
        mask |= KeyModifiers::CAPS_LOCK;
    }
    if is_down(KeyCode::NumLock) {
        mask |= KeyModifiers::NUM_LOCK;
    }
    if is_down(KeyCode::ScrollLock) {
        mask |= KeyModifiers::SCROLL_LOCK;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_for(down: &[KeyCode]) -> KeyModifiers {
        compute_modifier_mask(|code| down.contains(&code))
    }

    #[test]
    fn no_keys_down_yields_empty_mask() {
        assert_eq!(mask_for(&[]), KeyModifiers::empty());
    }

    #[test]
    fn left_and_right_ctrl_are_equivalent() {
        assert_eq!(mask_for(&[KeyCode::ControlLeft]), KeyModifiers::CTRL);
        assert_eq!(mask_for(&[KeyCode::ControlRight]), KeyModifiers::CTRL);
        assert_eq!(mask_for(&[KeyCode::ControlLeft, KeyCode::ControlRight]), KeyModifiers::CTRL);
    }

    #[test]
    fn modifiers_compose() {
        let mask = mask_for(&[KeyCode::ShiftLeft, KeyCode::AltRight, KeyCode::NumLock]);
        assert_eq!(
            mask,
            KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::NUM_LOCK
        );
    }

    #[test]
    fn non_modifier_keys_do_not_contribute() {
        assert_eq!(mask_for(&[KeyCode::KeyA, KeyCode::Space]), KeyModifiers::empty());
    }

    #[test]
    fn lock_keys_have_no_pair() {
        assert_eq!(mask_for(&[KeyCode::CapsLock]), KeyModifiers::CAPS_LOCK);
        assert_eq!(mask_for(&[KeyCode::ScrollLock]), KeyModifiers::SCROLL_LOCK);
    }
}

use winit::keyboard::KeyCode;

/// Toolkit key identifier.
///
/// The `Oem*` slots follow US keyboard layout semantics, matching the
/// toolkit's convention for region-specific punctuation keys. Left/right
/// modifier variants are distinct; collapsing them is the caller's choice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyIdentifier {
    /// Default for every host key code without an explicit mapping,
    /// including the "no key" sentinel.
    Unknown,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// The `;:` key.
    Oem1,
    /// The `/?` key.
    Oem2,
    /// The `` `~ `` key.
    Oem3,
    /// The `[{` key.
    Oem4,
    /// The `\|` key.
    Oem5,
    /// The `]}` key.
    Oem6,
    /// The `'"` key.
    Oem7,
    /// The extra backslash key of 102-key international layouts.
    Oem102,
    /// The `=+` key.
    OemPlus,
    /// The `,<` key.
    OemComma,
    /// The `-_` key.
    OemMinus,
    /// The `.>` key.
    OemPeriod,

    Space,
    Backspace,
    Tab,
    Return,
    Escape,
    Pause,
    CapsLock,
    PrintScreen,
    ScrollLock,
    NumLock,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,

    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    LeftMeta,
    RightMeta,
    /// The application/context-menu key.
    Apps,

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadMultiply,
    NumpadAdd,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,
    NumpadEnter,
    /// The `=` key on the numeric keypad.
    NumpadEqual,
    /// The thousands-separator key on the numeric keypad.
    NumpadSeparator,

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    BrowserBack,
    BrowserForward,
    BrowserRefresh,
    BrowserStop,
    BrowserSearch,
    BrowserFavorites,
    BrowserHome,

    VolumeMute,
    VolumeDown,
    VolumeUp,

    MediaNextTrack,
    MediaPrevTrack,
    MediaStop,
    MediaPlayPause,

    LaunchMail,
    LaunchMediaSelect,
    LaunchApp1,
    LaunchApp2,
}

/// Translates a host key code into the toolkit's key identifier.
///
/// Total over the host enumeration: every code maps to exactly one
/// identifier, with [`KeyIdentifier::Unknown`] as the default for codes the
/// toolkit has no slot for. Pure lookup; no state, no side effects.
pub fn translate_key(code: KeyCode) -> KeyIdentifier {
    use KeyIdentifier as Ki;

    match code {
        // Letters.
        KeyCode::KeyA => Ki::A,
        KeyCode::KeyB => Ki::B,
        KeyCode::KeyC => Ki::C,
        KeyCode::KeyD => Ki::D,
        KeyCode::KeyE => Ki::E,
        KeyCode::KeyF => Ki::F,
        KeyCode::KeyG => Ki::G,
        KeyCode::KeyH => Ki::H,
        KeyCode::KeyI => Ki::I,
        KeyCode::KeyJ => Ki::J,
        KeyCode::KeyK => Ki::K,
        KeyCode::KeyL => Ki::L,
        KeyCode::KeyM => Ki::M,
        KeyCode::KeyN => Ki::N,
        KeyCode::KeyO => Ki::O,
        KeyCode::KeyP => Ki::P,
        KeyCode::KeyQ => Ki::Q,
        KeyCode::KeyR => Ki::R,
        KeyCode::KeyS => Ki::S,
        KeyCode::KeyT => Ki::T,
        KeyCode::KeyU => Ki::U,
        KeyCode::KeyV => Ki::V,
        KeyCode::KeyW => Ki::W,
        KeyCode::KeyX => Ki::X,
        KeyCode::KeyY => Ki::Y,
        KeyCode::KeyZ => Ki::Z,

        // Digit row.
        KeyCode::Digit0 => Ki::Digit0,
        KeyCode::Digit1 => Ki::Digit1,
        KeyCode::Digit2 => Ki::Digit2,
        KeyCode::Digit3 => Ki::Digit3,
        KeyCode::Digit4 => Ki::Digit4,
        KeyCode::Digit5 => Ki::Digit5,
        KeyCode::Digit6 => Ki::Digit6,
        KeyCode::Digit7 => Ki::Digit7,
        KeyCode::Digit8 => Ki::Digit8,
        KeyCode::Digit9 => Ki::Digit9,

        // Punctuation, US layout semantics.
        KeyCode::Semicolon => Ki::Oem1,
        KeyCode::Slash => Ki::Oem2,
        KeyCode::Backquote => Ki::Oem3,
        KeyCode::BracketLeft => Ki::Oem4,
        KeyCode::Backslash => Ki::Oem5,
        KeyCode::BracketRight => Ki::Oem6,
        KeyCode::Quote => Ki::Oem7,
        KeyCode::IntlBackslash => Ki::Oem102,
        KeyCode::Equal => Ki::OemPlus,
        KeyCode::Comma => Ki::OemComma,
        KeyCode::Minus => Ki::OemMinus,
        KeyCode::Period => Ki::OemPeriod,

        // Whitespace and control.
        KeyCode::Space => Ki::Space,
        KeyCode::Backspace => Ki::Backspace,
        KeyCode::Tab => Ki::Tab,
        KeyCode::Enter => Ki::Return,
        KeyCode::Escape => Ki::Escape,
        KeyCode::Pause => Ki::Pause,
        KeyCode::CapsLock => Ki::CapsLock,
        KeyCode::PrintScreen => Ki::PrintScreen,
        KeyCode::ScrollLock => Ki::ScrollLock,
        KeyCode::NumLock => Ki::NumLock,

        // Navigation block.
        KeyCode::Insert => Ki::Insert,
        KeyCode::Delete => Ki::Delete,
        KeyCode::Home => Ki::Home,
        KeyCode::End => Ki::End,
        KeyCode::PageUp => Ki::PageUp,
        KeyCode::PageDown => Ki::PageDown,
        KeyCode::ArrowLeft => Ki::ArrowLeft,
        KeyCode::ArrowRight => Ki::ArrowRight,
        KeyCode::ArrowUp => Ki::ArrowUp,
        KeyCode::ArrowDown => Ki::ArrowDown,

        // Modifiers, left/right kept distinct.
        KeyCode::ShiftLeft => Ki::LeftShift,
        KeyCode::ShiftRight => Ki::RightShift,
        KeyCode::ControlLeft => Ki::LeftControl,
        KeyCode::ControlRight => Ki::RightControl,
        KeyCode::AltLeft => Ki::LeftAlt,
        KeyCode::AltRight => Ki::RightAlt,
        KeyCode::SuperLeft => Ki::LeftMeta,
        KeyCode::SuperRight => Ki::RightMeta,
        KeyCode::ContextMenu => Ki::Apps,

        // Numeric keypad.
        KeyCode::Numpad0 => Ki::Numpad0,
        KeyCode::Numpad1 => Ki::Numpad1,
        KeyCode::Numpad2 => Ki::Numpad2,
        KeyCode::Numpad3 => Ki::Numpad3,
        KeyCode::Numpad4 => Ki::Numpad4,
        KeyCode::Numpad5 => Ki::Numpad5,
        KeyCode::Numpad6 => Ki::Numpad6,
        KeyCode::Numpad7 => Ki::Numpad7,
        KeyCode::Numpad8 => Ki::Numpad8,
        KeyCode::Numpad9 => Ki::Numpad9,
        KeyCode::NumpadMultiply => Ki::NumpadMultiply,
        KeyCode::NumpadAdd => Ki::NumpadAdd,
        KeyCode::NumpadSubtract => Ki::NumpadSubtract,
        KeyCode::NumpadDecimal => Ki::NumpadDecimal,
        KeyCode::NumpadDivide => Ki::NumpadDivide,
        KeyCode::NumpadEnter => Ki::NumpadEnter,
        KeyCode::NumpadEqual => Ki::NumpadEqual,
        KeyCode::NumpadComma => Ki::NumpadSeparator,

        // Function row.
        KeyCode::F1 => Ki::F1,
        KeyCode::F2 => Ki::F2,
        KeyCode::F3 => Ki::F3,
        KeyCode::F4 => Ki::F4,
        KeyCode::F5 => Ki::F5,
        KeyCode::F6 => Ki::F6,
        KeyCode::F7 => Ki::F7,
        KeyCode::F8 => Ki::F8,
        KeyCode::F9 => Ki::F9,
        KeyCode::F10 => Ki::F10,
        KeyCode::F11 => Ki::F11,
        KeyCode::F12 => Ki::F12,
        KeyCode::F13 => Ki::F13,
        KeyCode::F14 => Ki::F14,
        KeyCode::F15 => Ki::F15,
        KeyCode::F16 => Ki::F16,
        KeyCode::F17 => Ki::F17,
        KeyCode::F18 => Ki::F18,
        KeyCode::F19 => Ki::F19,
        KeyCode::F20 => Ki::F20,
        KeyCode::F21 => Ki::F21,
        KeyCode::F22 => Ki::F22,
        KeyCode::F23 => Ki::F23,
        KeyCode::F24 => Ki::F24,

        // Browser keys.
        KeyCode::BrowserBack => Ki::BrowserBack,
        KeyCode::BrowserForward => Ki::BrowserForward,
        KeyCode::BrowserRefresh => Ki::BrowserRefresh,
        KeyCode::BrowserStop => Ki::BrowserStop,
        KeyCode::BrowserSearch => Ki::BrowserSearch,
        KeyCode::BrowserFavorites => Ki::BrowserFavorites,
        KeyCode::BrowserHome => Ki::BrowserHome,

        // Volume and media keys.
        KeyCode::AudioVolumeMute => Ki::VolumeMute,
        KeyCode::AudioVolumeDown => Ki::VolumeDown,
        KeyCode::AudioVolumeUp => Ki::VolumeUp,
        KeyCode::MediaTrackNext => Ki::MediaNextTrack,
        KeyCode::MediaTrackPrevious => Ki::MediaPrevTrack,
        KeyCode::MediaStop => Ki::MediaStop,
        KeyCode::MediaPlayPause => Ki::MediaPlayPause,

        // Launcher keys.
        KeyCode::LaunchMail => Ki::LaunchMail,
        KeyCode::MediaSelect => Ki::LaunchMediaSelect,
        KeyCode::LaunchApp1 => Ki::LaunchApp1,
        KeyCode::LaunchApp2 => Ki::LaunchApp2,

        // Everything else (IME, power, F25+, …) has no toolkit slot.
        _ => Ki::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── totality and determinism ──────────────────────────────────────────

    #[test]
    fn same_input_same_output() {
        for code in [KeyCode::KeyA, KeyCode::Equal, KeyCode::NumpadEnter, KeyCode::Fn] {
            assert_eq!(translate_key(code), translate_key(code));
        }
    }

    #[test]
    fn unlisted_codes_map_to_unknown() {
        for code in [
            KeyCode::Fn,
            KeyCode::Hiragana,
            KeyCode::Power,
            KeyCode::F35,
            KeyCode::NumpadMemoryStore,
        ] {
            assert_eq!(translate_key(code), KeyIdentifier::Unknown, "{code:?}");
        }
    }

    // ── representative rows ───────────────────────────────────────────────

    #[test]
    fn letters_and_digits() {
        assert_eq!(translate_key(KeyCode::KeyA), KeyIdentifier::A);
        assert_eq!(translate_key(KeyCode::KeyZ), KeyIdentifier::Z);
        assert_eq!(translate_key(KeyCode::Digit0), KeyIdentifier::Digit0);
        assert_eq!(translate_key(KeyCode::Digit9), KeyIdentifier::Digit9);
    }

    #[test]
    fn oem_punctuation_follows_us_layout() {
        assert_eq!(translate_key(KeyCode::Semicolon), KeyIdentifier::Oem1);
        assert_eq!(translate_key(KeyCode::Quote), KeyIdentifier::Oem7);
        assert_eq!(translate_key(KeyCode::Backquote), KeyIdentifier::Oem3);
        assert_eq!(translate_key(KeyCode::IntlBackslash), KeyIdentifier::Oem102);
        assert_eq!(translate_key(KeyCode::Equal), KeyIdentifier::OemPlus);
    }

    #[test]
    fn modifier_sides_stay_distinct() {
        assert_ne!(translate_key(KeyCode::ShiftLeft), translate_key(KeyCode::ShiftRight));
        assert_ne!(translate_key(KeyCode::ControlLeft), translate_key(KeyCode::ControlRight));
        assert_ne!(translate_key(KeyCode::AltLeft), translate_key(KeyCode::AltRight));
        assert_ne!(translate_key(KeyCode::SuperLeft), translate_key(KeyCode::SuperRight));
    }

    #[test]
    fn alt_and_meta_families_do_not_collapse() {
        assert_eq!(translate_key(KeyCode::AltLeft), KeyIdentifier::LeftAlt);
        assert_eq!(translate_key(KeyCode::SuperLeft), KeyIdentifier::LeftMeta);
    }

    #[test]
    fn numpad_keys() {
        assert_eq!(translate_key(KeyCode::Numpad5), KeyIdentifier::Numpad5);
        assert_eq!(translate_key(KeyCode::NumpadEqual), KeyIdentifier::NumpadEqual);
        assert_eq!(translate_key(KeyCode::NumpadEnter), KeyIdentifier::NumpadEnter);
        assert_eq!(translate_key(KeyCode::NumpadComma), KeyIdentifier::NumpadSeparator);
    }

    #[test]
    fn media_and_browser_keys() {
        assert_eq!(translate_key(KeyCode::BrowserBack), KeyIdentifier::BrowserBack);
        assert_eq!(translate_key(KeyCode::AudioVolumeUp), KeyIdentifier::VolumeUp);
        assert_eq!(translate_key(KeyCode::MediaPlayPause), KeyIdentifier::MediaPlayPause);
        assert_eq!(translate_key(KeyCode::MediaSelect), KeyIdentifier::LaunchMediaSelect);
    }
}

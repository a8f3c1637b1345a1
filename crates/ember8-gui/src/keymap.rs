use iced::keyboard;

/// Translates a host key into a keypad code.
///
/// The hex keypad maps onto the left of a QWERTY layout:
///
/// ```text
/// Keypad                   Keyboard
/// +-+-+-+-+                +-+-+-+-+
/// |1|2|3|C|                |1|2|3|4|
/// +-+-+-+-+                +-+-+-+-+
/// |4|5|6|D|                |Q|W|E|R|
/// +-+-+-+-+       <=       +-+-+-+-+
/// |7|8|9|E|                |A|S|D|F|
/// +-+-+-+-+                +-+-+-+-+
/// |A|0|B|F|                |Z|X|C|V|
/// +-+-+-+-+                +-+-+-+-+
/// ```
///
/// Anything else returns `None` and is ignored by the emulator.
pub fn key_code(key: &keyboard::Key) -> Option<u8> {
    let keyboard::Key::Character(ch) = key else {
        return None;
    };
    // Shift state is irrelevant to the keypad
    match ch.to_lowercase().as_str() {
        "1" => Some(0x1),
        "2" => Some(0x2),
        "3" => Some(0x3),
        "4" => Some(0xC),
        "q" => Some(0x4),
        "w" => Some(0x5),
        "e" => Some(0x6),
        "r" => Some(0xD),
        "a" => Some(0x7),
        "s" => Some(0x8),
        "d" => Some(0x9),
        "f" => Some(0xE),
        "z" => Some(0xA),
        "x" => Some(0x0),
        "c" => Some(0xB),
        "v" => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_four_corners_of_the_layout() {
        let key = |s: &str| keyboard::Key::Character(s.into());
        assert_eq!(key_code(&key("1")), Some(0x1));
        assert_eq!(key_code(&key("4")), Some(0xC));
        assert_eq!(key_code(&key("z")), Some(0xA));
        assert_eq!(key_code(&key("v")), Some(0xF));
        assert_eq!(key_code(&key("p")), None);
        assert_eq!(key_code(&keyboard::Key::Unidentified), None);
    }
}

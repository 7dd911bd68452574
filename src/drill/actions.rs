//! Semantic action IDs for Math Drill click targets.

// ── Answer field ────────────────────────────────────────────────
/// Keypad digit (base + 0..=9).
pub const DIGIT_BASE: u16 = 0;
pub const ERASE: u16 = 10;
pub const SUBMIT: u16 = 11;

// ── Feedback ────────────────────────────────────────────────────
pub const CONTINUE: u16 = 20;

// ── Session ─────────────────────────────────────────────────────
pub const RESTART: u16 = 30;

/// Keypad layout, row-major: 1 2 3 / 4 5 6 / 7 8 9 / ⌫ 0 ✓.
pub const KEYPAD: [u16; 12] = [
    DIGIT_BASE + 1,
    DIGIT_BASE + 2,
    DIGIT_BASE + 3,
    DIGIT_BASE + 4,
    DIGIT_BASE + 5,
    DIGIT_BASE + 6,
    DIGIT_BASE + 7,
    DIGIT_BASE + 8,
    DIGIT_BASE + 9,
    ERASE,
    DIGIT_BASE,
    SUBMIT,
];

/// The digit a keypad action types, if it is a digit key.
pub fn digit_for(action_id: u16) -> Option<char> {
    if (DIGIT_BASE..DIGIT_BASE + 10).contains(&action_id) {
        char::from_digit((action_id - DIGIT_BASE) as u32, 10)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_actions_map_to_chars() {
        assert_eq!(digit_for(DIGIT_BASE), Some('0'));
        assert_eq!(digit_for(DIGIT_BASE + 9), Some('9'));
        assert_eq!(digit_for(ERASE), None);
        assert_eq!(digit_for(RESTART), None);
    }

    #[test]
    fn keypad_has_every_digit_once() {
        let mut digits: Vec<char> = KEYPAD.iter().filter_map(|&id| digit_for(id)).collect();
        digits.sort();
        assert_eq!(digits.iter().collect::<String>(), "0123456789");
    }
}

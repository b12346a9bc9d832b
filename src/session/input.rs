//! Input token grammar
//!
//! Pure parsers for the three prompts the game shows. Anything that parses
//! to `None` earns a one-line rejection and a re-prompt.

/// Reserved gameplay token that saves the game and exits
pub const SAVE_TOKEN: char = '5';
/// Load-select token that skips loading
pub const SKIP_TOKEN: char = 'x';

/// One accepted gameplay input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInput {
    /// A single lowercase letter guess
    Letter(char),
    /// Save the game and exit
    Save,
}

/// One accepted load-select input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadChoice {
    /// Start a fresh game instead of loading
    Skip,
    /// Load the save at this index into the listed files
    Index(usize),
}

/// Parse a gameplay token: a single letter `a`-`z`, or `5` to save
#[must_use]
pub fn parse_turn(input: &str) -> Option<TurnInput> {
    let input = input.trim().to_lowercase();
    let mut chars = input.chars();
    let (ch, rest) = (chars.next()?, chars.next());
    if rest.is_some() {
        return None;
    }
    match ch {
        SAVE_TOKEN => Some(TurnInput::Save),
        'a'..='z' => Some(TurnInput::Letter(ch)),
        _ => None,
    }
}

/// Parse a load-select token: `x` to skip, or an in-range save index
///
/// Out-of-range indices are invalid rather than clamped, so `99` with three
/// saves re-prompts.
#[must_use]
pub fn parse_load_choice(input: &str, available: usize) -> Option<LoadChoice> {
    let input = input.trim().to_lowercase();
    if input.len() == 1 && input.starts_with(SKIP_TOKEN) {
        return Some(LoadChoice::Skip);
    }
    // Digits only: no sign, no whitespace
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let index: usize = input.parse().ok()?;
    (index < available).then_some(LoadChoice::Index(index))
}

/// Parse a replay token: `y` or `n`
#[must_use]
pub fn parse_replay(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_accepts_single_letters() {
        assert_eq!(parse_turn("a"), Some(TurnInput::Letter('a')));
        assert_eq!(parse_turn("z"), Some(TurnInput::Letter('z')));
        assert_eq!(parse_turn("  q  "), Some(TurnInput::Letter('q')));
    }

    #[test]
    fn turn_uppercase_is_normalized() {
        assert_eq!(parse_turn("M"), Some(TurnInput::Letter('m')));
    }

    #[test]
    fn turn_save_token() {
        assert_eq!(parse_turn("5"), Some(TurnInput::Save));
    }

    #[test]
    fn turn_rejects_everything_else() {
        assert_eq!(parse_turn(""), None);
        assert_eq!(parse_turn("ab"), None);
        assert_eq!(parse_turn("7"), None);
        assert_eq!(parse_turn("!"), None);
        assert_eq!(parse_turn("save"), None);
    }

    #[test]
    fn load_choice_skip() {
        assert_eq!(parse_load_choice("x", 3), Some(LoadChoice::Skip));
        assert_eq!(parse_load_choice("X", 0), Some(LoadChoice::Skip));
    }

    #[test]
    fn load_choice_in_range_index() {
        assert_eq!(parse_load_choice("0", 3), Some(LoadChoice::Index(0)));
        assert_eq!(parse_load_choice("2", 3), Some(LoadChoice::Index(2)));
    }

    #[test]
    fn load_choice_out_of_range_is_invalid() {
        assert_eq!(parse_load_choice("3", 3), None);
        assert_eq!(parse_load_choice("99", 3), None);
    }

    #[test]
    fn load_choice_rejects_non_digits() {
        assert_eq!(parse_load_choice("", 3), None);
        assert_eq!(parse_load_choice("one", 3), None);
        assert_eq!(parse_load_choice("-1", 3), None);
        assert_eq!(parse_load_choice("+1", 3), None);
        assert_eq!(parse_load_choice("1.0", 3), None);
    }

    #[test]
    fn replay_tokens() {
        assert_eq!(parse_replay("y"), Some(true));
        assert_eq!(parse_replay("n"), Some(false));
        assert_eq!(parse_replay("Y"), Some(true));
        assert_eq!(parse_replay("yes"), None);
        assert_eq!(parse_replay(""), None);
        assert_eq!(parse_replay("maybe"), None);
    }
}

//! Output alphabets for derived credentials.
//!
//! An [`Alphabet`] is the concatenation of the enabled character classes,
//! laid out in ASCII code-point order. Symbols are not contiguous in ASCII,
//! so the symbol class contributes four separate segments interleaved with
//! the digit and letter ranges. With every class enabled the alphabet is
//! exactly the 94 printable characters `!` (33) through `~` (126).
//!
//! The segment table is the single source of truth: class membership checks
//! in [`CharClass::contains`] read the same table the alphabet is built from.

use crate::derivation::DerivationSettings;

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

const SYMBOLS_LOW: &str = "!\"#$%&'()*+,-./";
const DIGITS: &str = "0123456789";
const SYMBOLS_MID: &str = ":;<=>?@";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SYMBOLS_BRACKET: &str = "[\\]^_`";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const SYMBOLS_HIGH: &str = "{|}~";

/// Alphabet segments in build order. Changing this order changes every
/// derived credential.
const SEGMENTS: [(CharClass, &str); 7] = [
    (CharClass::Symbol, SYMBOLS_LOW),
    (CharClass::Digit, DIGITS),
    (CharClass::Symbol, SYMBOLS_MID),
    (CharClass::Uppercase, UPPERCASE),
    (CharClass::Symbol, SYMBOLS_BRACKET),
    (CharClass::Lowercase, LOWERCASE),
    (CharClass::Symbol, SYMBOLS_HIGH),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A character class that can be required in a derived credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a`-`z`
    Lowercase,
    /// `A`-`Z`
    Uppercase,
    /// `0`-`9`
    Digit,
    /// The 32 printable ASCII punctuation characters.
    Symbol,
}

impl CharClass {
    /// All classes, in the order settings list them.
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digit, Self::Symbol];

    /// Whether `c` belongs to this class.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        SEGMENTS
            .iter()
            .any(|(class, segment)| *class == self && segment.contains(c))
    }

    /// Human-readable name, used in log and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "number",
            Self::Symbol => "symbol",
        }
    }
}

/// Ordered set of characters a derived credential is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
    classes: Vec<CharClass>,
}

#[allow(clippy::len_without_is_empty)]
impl Alphabet {
    /// Build an alphabet from a set of classes.
    ///
    /// The order of `classes` is irrelevant; the segments are always laid out
    /// in code-point order. Returns `None` when no class is given, which
    /// callers treat as hex-dump mode.
    #[must_use]
    pub fn new(classes: &[CharClass]) -> Option<Self> {
        let enabled: Vec<CharClass> = CharClass::ALL
            .into_iter()
            .filter(|class| classes.contains(class))
            .collect();
        if enabled.is_empty() {
            return None;
        }

        let chars = SEGMENTS
            .iter()
            .filter(|(class, _)| enabled.contains(class))
            .map(|(_, segment)| *segment)
            .collect();

        Some(Self {
            chars,
            classes: enabled,
        })
    }

    /// Build the alphabet selected by the include-flags of `settings`.
    #[must_use]
    pub fn from_settings(settings: &DerivationSettings) -> Option<Self> {
        Self::new(&settings.enabled_classes())
    }

    /// Number of characters in the alphabet (always non-zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The alphabet as a string, in build order.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    /// Classes this alphabet was built from.
    #[must_use]
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Map a 32-bit word onto the alphabet with wraparound.
    #[must_use]
    pub fn char_for_word(&self, word: u32) -> char {
        let bytes = self.chars.as_bytes();
        // `len()` is never zero and a u32 always fits in a u64.
        #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
        let index = (u64::from(word) % bytes.len() as u64) as usize;
        char::from(bytes[index])
    }

    /// Classes of this alphabet that have no representative in `candidate`.
    #[must_use]
    pub fn missing_classes(&self, candidate: &str) -> Vec<CharClass> {
        self.classes
            .iter()
            .copied()
            .filter(|class| !candidate.chars().any(|c| class.contains(c)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

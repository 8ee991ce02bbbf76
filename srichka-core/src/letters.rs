//! Phonological classification of Bulgarian letters
//!
//! Every predicate is a total function over `char`: letters outside the
//! Bulgarian alphabet, digits and punctuation simply belong to no class.

/// Vowel letters
pub const VOWELS: [char; 8] = ['а', 'ъ', 'о', 'у', 'е', 'и', 'ю', 'я'];

/// Sonorant consonants
pub const SONORANTS: [char; 5] = ['л', 'м', 'н', 'р', 'й'];

/// Stop consonants
pub const STOPS: [char; 6] = ['б', 'п', 'г', 'к', 'д', 'т'];

/// Fricative consonants
pub const FRICATIVES: [char; 7] = ['в', 'ф', 'ж', 'ш', 'з', 'с', 'х'];

/// Single-letter affricates
pub const AFFRICATES: [char; 2] = ['ч', 'ц'];

/// One letter pronounced as two sounds, a fricative followed by a stop ("шт")
pub const SHCH: char = 'щ';

/// Softens the preceding consonant; carries no sonority of its own
pub const PALATALIZER: char = 'ь';

/// Primary phonological class of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Syllable nucleus
    Vowel,
    /// л, м, н, р, й
    Sonorant,
    /// б, п, г, к, д, т
    Stop,
    /// в, ф, ж, ш, з, с, х
    Fricative,
    /// ч, ц
    Affricate,
    /// щ, a fricative released into a stop
    FricativeStop,
    /// ь
    Palatalizer,
    /// Anything the engine does not recognize
    Other,
}

impl LetterClass {
    /// Classify a single letter
    pub fn of(ch: char) -> Self {
        if is_vowel(ch) {
            LetterClass::Vowel
        } else if is_sonorant(ch) {
            LetterClass::Sonorant
        } else if is_stop(ch) {
            LetterClass::Stop
        } else if is_fricative(ch) {
            LetterClass::Fricative
        } else if is_affricate(ch) {
            LetterClass::Affricate
        } else if ch == SHCH {
            LetterClass::FricativeStop
        } else if is_palatalizer(ch) {
            LetterClass::Palatalizer
        } else {
            LetterClass::Other
        }
    }

    /// Whether this class counts as a consonant
    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            LetterClass::Sonorant
                | LetterClass::Stop
                | LetterClass::Fricative
                | LetterClass::Affricate
                | LetterClass::FricativeStop
        )
    }
}

#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

#[inline]
pub fn is_sonorant(ch: char) -> bool {
    SONORANTS.contains(&ch)
}

#[inline]
pub fn is_stop(ch: char) -> bool {
    STOPS.contains(&ch)
}

#[inline]
pub fn is_fricative(ch: char) -> bool {
    FRICATIVES.contains(&ch)
}

#[inline]
pub fn is_affricate(ch: char) -> bool {
    AFFRICATES.contains(&ch)
}

#[inline]
pub fn is_palatalizer(ch: char) -> bool {
    ch == PALATALIZER
}

/// Sonorants, stops, fricatives, affricates and щ
#[inline]
pub fn is_consonant(ch: char) -> bool {
    ch == SHCH || is_sonorant(ch) || is_stop(ch) || is_fricative(ch) || is_affricate(ch)
}

/// Opposite of sonorant
#[inline]
pub fn is_obstruent(ch: char) -> bool {
    is_stop(ch) || is_fricative(ch) || is_affricate(ch)
}

/// Any letter the classifier knows about, including ь
pub fn is_bulgarian_letter(ch: char) -> bool {
    LetterClass::of(ch) != LetterClass::Other
}

/// Number of vowel letters in `word`
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&ch| is_vowel(ch)).count()
}

use std::collections::HashMap;

/// Number of symbols in every base-85 dictionary.
pub const BASE: usize = 85;

/// First symbol of the standard dictionary: `!` through `u`, 85 consecutive
/// ASCII code points.
const STANDARD_FIRST: u8 = b'!';
const STANDARD_LAST: u8 = b'u';

/// The Z85 (ZeroMQ) dictionary, reproduced bit-for-bit from the published
/// standard: digits, lowercase, uppercase, then a fixed punctuation set.
const Z85_SYMBOLS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// An ordered set of 85 distinct symbols mapping base-85 digits to text.
///
/// The decoding map (symbol back to digit) is derived automatically on
/// construction. Symbols absent from the dictionary are treated as ignorable
/// noise during decoding, so dictionaries are typically drawn from printable
/// ASCII; nothing enforces a code point range.
#[derive(Debug, Clone)]
pub struct Dictionary {
    symbols: Vec<char>,
    digits: HashMap<char, u8>,
}

impl Dictionary {
    /// Creates a dictionary from an ordered list of symbols.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The 85 symbols, index = digit value
    ///
    /// # Errors
    ///
    /// Returns an error if the list is not exactly 85 symbols long or
    /// contains duplicates.
    pub fn new(symbols: Vec<char>) -> Result<Self, String> {
        if symbols.len() != BASE {
            return Err(format!(
                "dictionary must contain exactly {} symbols, got {}",
                BASE,
                symbols.len()
            ));
        }

        let mut digits = HashMap::with_capacity(BASE);
        for (i, &symbol) in symbols.iter().enumerate() {
            if digits.insert(symbol, i as u8).is_some() {
                return Err(format!("duplicate symbol in dictionary: {}", symbol));
            }
        }

        Ok(Dictionary { symbols, digits })
    }

    /// Creates a dictionary from a string of symbols.
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// The standard Ascii85 dictionary: code points 33 (`!`) through 117 (`u`).
    pub fn standard() -> Self {
        Self::build((STANDARD_FIRST..=STANDARD_LAST).map(char::from).collect())
    }

    /// The Z85 dictionary used by ZeroMQ.
    pub fn z85() -> Self {
        Self::build(Z85_SYMBOLS.chars().collect())
    }

    // Skips validation; callers pass known-good symbol sets.
    fn build(symbols: Vec<char>) -> Self {
        let digits = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (symbol, i as u8))
            .collect();
        Dictionary { symbols, digits }
    }

    /// Returns the base (radix) of the dictionary, always 85.
    pub fn base(&self) -> usize {
        BASE
    }

    /// Encodes a digit (0..=84) as its symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn symbol(&self, digit: u8) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the dictionary.
    pub fn digit(&self, symbol: char) -> Option<u8> {
        self.digits.get(&symbol).copied()
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

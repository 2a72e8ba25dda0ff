use crate::dictionary::Dictionary;
use crate::group::{self, GROUP_BYTES, GROUP_DIGITS, MAX_DIGIT};

/// Single symbol standing in for a full group of four zero bytes.
const ZERO_GROUP: char = 'z';

/// Single symbol standing in for a full group of four spaces (btoa 4.2).
const SPACE_GROUP: char = 'y';

/// Word value of four ASCII spaces.
const SPACE_WORD: u32 = 0x2020_2020;

const BLOCK_START: &str = "<~";
const BLOCK_END: &str = "~>";

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input opens with `<~` but does not close with `~>`
    DelimiterMismatch,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::DelimiterMismatch => write!(f, "invalid ascii85 delimiter pair"),
        }
    }
}

impl std::error::Error for DecodeError {}

pub(crate) fn encode(
    data: &[u8],
    dictionary: &Dictionary,
    delimiter: bool,
    group_space: bool,
) -> String {
    // Exact output length: 5 symbols per full group, leftover + 1 for a
    // partial tail, 4 for the markers. Shortcut symbols only shrink it.
    let leftover = data.len() % GROUP_BYTES;
    let mut capacity = data.len() / GROUP_BYTES * GROUP_DIGITS;
    if leftover > 0 {
        capacity += leftover + 1;
    }
    if delimiter {
        capacity += BLOCK_START.len() + BLOCK_END.len();
    }
    let mut output = String::with_capacity(capacity);

    if delimiter {
        output.push_str(BLOCK_START);
    }

    let groups = data.chunks_exact(GROUP_BYTES);
    let tail = groups.remainder();

    for chunk in groups {
        let word = group::pack(chunk);
        if group_space && word == SPACE_WORD {
            output.push(SPACE_GROUP);
        } else if word == 0 {
            output.push(ZERO_GROUP);
        } else {
            for digit in group::digits(word) {
                output.push(dictionary.symbol(digit).unwrap());
            }
        }
    }

    if !tail.is_empty() {
        if tail.iter().all(|&byte| byte == 0) {
            // `z` is reserved for full groups; a zero tail spells out the
            // digit-0 symbol, one more than the byte count.
            for _ in 0..=tail.len() {
                output.push(dictionary.symbol(0).unwrap());
            }
        } else {
            // Encode as if zero-padded to a full group, then keep only
            // leftover + 1 symbols.
            let digits = group::digits(group::pack(tail));
            for &digit in &digits[..tail.len() + 1] {
                output.push(dictionary.symbol(digit).unwrap());
            }
        }
    }

    if delimiter {
        output.push_str(BLOCK_END);
    }

    output
}

pub(crate) fn decode(input: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    // An input shorter than both markers is never treated as delimited.
    let body = if input.len() >= BLOCK_START.len() + BLOCK_END.len()
        && input.starts_with(BLOCK_START)
    {
        match input.strip_suffix(BLOCK_END) {
            Some(stripped) => &stripped[BLOCK_START.len()..],
            None => return Err(DecodeError::DelimiterMismatch),
        }
    } else {
        input
    };

    let mut output = Vec::with_capacity(body.len() / GROUP_DIGITS * GROUP_BYTES + GROUP_BYTES);
    let mut word = 0u32;
    let mut digits = 0usize;

    for symbol in body.chars() {
        // Shortcut symbols expand immediately and never consume a digit slot,
        // in every configuration.
        if symbol == ZERO_GROUP {
            output.extend_from_slice(&[0; GROUP_BYTES]);
            continue;
        }
        if symbol == SPACE_GROUP {
            output.extend_from_slice(&[b' '; GROUP_BYTES]);
            continue;
        }

        let digit = match dictionary.digit(symbol) {
            Some(digit) => digit,
            None => continue, // embedded whitespace and other noise
        };

        word = group::push_digit(word, digit);
        digits += 1;

        if digits == GROUP_DIGITS {
            output.extend_from_slice(&word.to_be_bytes());
            word = 0;
            digits = 0;
        }
    }

    // A trailing group of N digits decodes to N - 1 bytes: pad with the
    // maximal digit, then keep the most significant bytes. A lone digit
    // yields nothing.
    if digits > 0 {
        for _ in digits..GROUP_DIGITS {
            word = group::push_digit(word, MAX_DIGIT);
        }
        let bytes = word.to_be_bytes();
        output.extend_from_slice(&bytes[..digits - 1]);
    }

    Ok(output)
}

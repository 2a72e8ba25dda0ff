use crate::config::CodecConfig;
use crate::dictionary::Dictionary;
use crate::encoding::{self, DecodeError};

/// An immutable Ascii85 codec: a dictionary plus framing flags.
///
/// Configuration is fixed at construction; `encode` and `decode` never
/// mutate the codec, so a single value can be shared freely across threads.
/// Independent codecs with the same configuration behave identically.
#[derive(Debug, Clone)]
pub struct Codec {
    dictionary: Dictionary,
    delimiter: bool,
    group_space: bool,
}

/// Per-call overrides for [`Codec::encode_with`].
///
/// Every field defaults to "use the codec's own setting"; the codec itself
/// is never modified.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// One-off dictionary for this call
    pub dictionary: Option<Dictionary>,
    /// Wrap output in `<~`/`~>` markers
    pub delimiter: Option<bool>,
    /// Enable the all-space group shortcut
    pub group_space: Option<bool>,
}

impl Codec {
    /// Creates a codec from a dictionary and framing flags.
    ///
    /// # Arguments
    ///
    /// * `dictionary` - The 85-symbol dictionary
    /// * `delimiter` - Wrap encoded output in `<~`/`~>` markers
    /// * `group_space` - Encode a full group of spaces as the single symbol `y`
    pub fn new(dictionary: Dictionary, delimiter: bool, group_space: bool) -> Self {
        Codec {
            dictionary,
            delimiter,
            group_space,
        }
    }

    /// The standard Ascii85 codec: `!`..`u` dictionary, no markers.
    pub fn standard() -> Self {
        Self::new(Dictionary::standard(), false, false)
    }

    /// The ZeroMQ flavor, using the Z85 dictionary.
    pub fn zeromq() -> Self {
        Self::new(Dictionary::z85(), false, false)
    }

    /// The PostScript flavor: standard dictionary, output always wrapped in
    /// `<~`/`~>` markers.
    pub fn postscript() -> Self {
        Self::new(Dictionary::standard(), true, false)
    }

    /// Creates a codec from a registry entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry resolves to anything other than 85
    /// distinct symbols.
    pub fn from_config(config: &CodecConfig) -> Result<Self, String> {
        let chars = config.effective_chars()?;
        let dictionary = Dictionary::from_str(&chars)?;
        Ok(Self::new(dictionary, config.delimiter, config.group_space))
    }

    /// Returns the codec's dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether encoded output is wrapped in `<~`/`~>` markers.
    pub fn delimiter(&self) -> bool {
        self.delimiter
    }

    /// Whether the all-space group shortcut is enabled.
    pub fn group_space(&self) -> bool {
        self.group_space
    }

    /// Encodes binary data to an Ascii85 string.
    ///
    /// Never fails: any byte sequence encodes, and empty input produces
    /// empty output (or just the marker pair when delimited).
    pub fn encode(&self, data: &[u8]) -> String {
        encoding::encode(data, &self.dictionary, self.delimiter, self.group_space)
    }

    /// Encodes with per-call overrides, leaving the codec untouched.
    pub fn encode_with(&self, data: &[u8], options: &EncodeOptions) -> String {
        let dictionary = options.dictionary.as_ref().unwrap_or(&self.dictionary);
        let delimiter = options.delimiter.unwrap_or(self.delimiter);
        let group_space = options.group_space.unwrap_or(self.group_space);
        encoding::encode(data, dictionary, delimiter, group_space)
    }

    /// Decodes an Ascii85 string back to bytes.
    ///
    /// Symbols outside the dictionary (whitespace, line breaks) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::DelimiterMismatch`] if the input opens with
    /// `<~` but does not close with `~>`. No partial result is returned.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        encoding::decode(input, &self.dictionary)
    }

    /// Decodes with a one-off dictionary, leaving the codec untouched.
    pub fn decode_with(
        &self,
        input: &str,
        dictionary: &Dictionary,
    ) -> Result<Vec<u8>, DecodeError> {
        encoding::decode(input, dictionary)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}

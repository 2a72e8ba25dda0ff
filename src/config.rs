use serde::Deserialize;
use std::collections::HashMap;

/// Configuration for a single codec loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct CodecConfig {
    /// The symbols comprising the dictionary (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting symbol for range-based dictionary definition
    /// Use with `length` to define sequential code point ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of symbols in a range-based dictionary
    #[serde(default)]
    pub length: Option<usize>,
    /// Wrap encoded output in `<~`/`~>` markers
    #[serde(default)]
    pub delimiter: bool,
    /// Enable the all-space group shortcut
    #[serde(default)]
    pub group_space: bool,
}

impl CodecConfig {
    /// Returns the effective symbol set, generating from a range if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` + `length` are set, generate a sequential range
    pub fn effective_chars(&self) -> Result<String, String> {
        // Explicit chars take priority
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;
            return Self::generate_range(start_char as u32, length);
        }

        Err("codec entry defines neither chars nor start/length".to_string())
    }

    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        let mut chars = String::with_capacity(length);
        for offset in 0..length as u32 {
            match char::from_u32(start + offset) {
                Some(c) => chars.push(c),
                None => return Err(format!("invalid code point in range: {}", start + offset)),
            }
        }
        Ok(chars)
    }
}

/// Named codec configurations, keyed the way they appear in TOML.
#[derive(Debug, Deserialize)]
pub struct CodecRegistry {
    pub codecs: HashMap<String, CodecConfig>,
}

impl CodecRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in registry: `standard`, `zeromq`, `postscript`.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads a registry from a custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Merges another registry into this one, overriding entries by name
    pub fn merge(&mut self, other: CodecRegistry) {
        for (name, codec) in other.codecs {
            self.codecs.insert(name, codec);
        }
    }

    pub fn get_codec(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }
}

//! # Ascii85 (Base85) encoding
//!
//! Transforms arbitrary bytes into a printable ASCII subset and back,
//! losslessly: every four input bytes become five base-85 symbols, with a
//! partial trailing group shortening proportionally. A full group of zero
//! bytes collapses to the single symbol `z`, and (optionally) a full group
//! of spaces to `y`. Output may be wrapped in the `<~`/`~>` marker pair;
//! whitespace embedded in encoded text is ignored on decode.
//!
//! Three dictionaries ship ready-made: the standard one (code points `!`
//! through `u`), the Z85 dictionary used by ZeroMQ, and the PostScript
//! flavor (standard dictionary, markers always on). Custom 85-symbol
//! dictionaries are accepted, either constructed directly or loaded from a
//! TOML registry.
//!
//! # Examples
//!
//! ```
//! use ascii85::Codec;
//!
//! let codec = Codec::standard();
//! let encoded = codec.encode(b"easy");
//! assert_eq!(encoded, "ARTY*");
//! assert_eq!(codec.decode(&encoded).unwrap(), b"easy");
//! ```
//!
//! Flavors are independent, immutable values:
//!
//! ```
//! use ascii85::Codec;
//!
//! assert_eq!(Codec::zeromq().encode(b"easy"), "wNPU9");
//! assert_eq!(Codec::postscript().encode(b"easy"), "<~ARTY*~>");
//! ```

mod codec;
mod config;
mod dictionary;
mod encoding;
mod group;

pub use codec::{Codec, EncodeOptions};
pub use config::{CodecConfig, CodecRegistry};
pub use dictionary::Dictionary;
pub use encoding::DecodeError;

/// Encodes binary data with the given codec.
pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data)
}

/// Decodes an Ascii85 string with the given codec.
pub fn decode(input: &str, codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(input)
}

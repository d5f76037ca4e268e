pub mod binary;
pub mod text;

use crate::error::Result;

/// Textual parse/format capability for a nullable geometry type.
///
/// SQL-style nullability lives in the `Option`: `Ok(None)` is the parsed
/// null value and `format_text(None)` renders the canonical null marker.
/// These are the only hooks a hosting environment needs for display and
/// query literals; the kernel depends on no hosting-runtime type.
pub trait TextCodec: Sized {
    /// Parses a textual literal.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed input, or a `ValidationError`
    /// where parsing constructs a validated value.
    fn parse_text(input: &str) -> Result<Option<Self>>;

    /// Formats a possibly-null value. Round-trips through
    /// [`TextCodec::parse_text`] for non-null values.
    fn format_text(value: Option<&Self>) -> String;
}

/// Binary serialize/deserialize capability for a nullable geometry type,
/// matching the persisted column layout.
pub trait BinaryCodec: Sized {
    /// Appends the binary record for `value` to `buf`.
    ///
    /// # Errors
    ///
    /// Returns a `CodecError` when the value cannot be represented, e.g. a
    /// point count exceeding the 4-byte length prefix.
    fn write_binary(value: Option<&Self>, buf: &mut Vec<u8>) -> Result<()>;

    /// Reads one binary record from the front of `input`, advancing it past
    /// the consumed bytes.
    ///
    /// # Errors
    ///
    /// Returns a `CodecError` for truncated or malformed input, or a
    /// `ValidationError` where decoding constructs a validated value.
    fn read_binary(input: &mut &[u8]) -> Result<Option<Self>>;
}

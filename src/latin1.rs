//! ISO-8859-1 decoding.

/// Decodes ISO-8859-1 bytes into a `String`.
///
/// Every byte maps to the Unicode code point of the same value, so decoding
/// never fails.
///
/// # Examples
///
/// ```
/// use addrx::latin1::decode;
///
/// assert_eq!(decode(b"addr"), "addr");
/// assert_eq!(decode(&[0x53, 0x74, 0x72, 0x61, 0xdf, 0x65]), "Straße");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

//! Value View Module
//!
//! Immutable wrapper around a cached byte payload.

use std::fmt;

use bytes::Bytes;

// == Value View ==
/// An immutable view of a cached byte payload.
///
/// Cloning a view is a cheap reference-count bump; the underlying buffer
/// is shared but never writable. Every extraction method (`to_vec`,
/// `to_string_lossy`) returns a fresh copy, so callers can never mutate
/// what the cache holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueView {
    data: Bytes,
}

impl ValueView {
    // == Constructor ==
    /// Creates a view over the given payload.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    // == Length ==
    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // == Byte Extraction ==
    /// Returns a copy of the payload as an owned byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    // == String Extraction ==
    /// Returns a copy of the payload as a string, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl From<Vec<u8>> for ValueView {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&str> for ValueView {
    fn from(data: &str) -> Self {
        Self::new(Bytes::copy_from_slice(data.as_bytes()))
    }
}

impl fmt::Display for ValueView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_len() {
        let view = ValueView::from("hello");
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_view_empty() {
        let view = ValueView::default();
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_extraction_copies() {
        let view = ValueView::from("data");

        let mut copy = view.to_vec();
        copy[0] = b'X';

        // Mutating the extracted copy must not affect the view.
        assert_eq!(view.to_vec(), b"data");
    }

    #[test]
    fn test_view_string_extraction() {
        let view = ValueView::from("630");
        assert_eq!(view.to_string_lossy(), "630");
        assert_eq!(view.to_string(), "630");
    }

    #[test]
    fn test_view_clone_shares_payload() {
        let view = ValueView::from("shared");
        let clone = view.clone();

        assert_eq!(view, clone);
        assert_eq!(clone.to_vec(), b"shared");
    }

    #[test]
    fn test_view_lossy_on_invalid_utf8() {
        let view = ValueView::new(vec![0xff, 0xfe]);
        let s = view.to_string_lossy();
        assert!(!s.is_empty());
    }
}

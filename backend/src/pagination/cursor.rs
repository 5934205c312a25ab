//! Opaque offset cursors

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::error::{PaginationError, PaginationResult};

const CURSOR_PREFIX: &str = "cursor:";

/// Opaque cursor pointing at a zero-based offset in an ordered collection.
///
/// Each offset has exactly one encoding, so cursors are stable across
/// requests. Clients should treat the value as an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Encode an offset as a cursor
    pub fn encode(offset: usize) -> Self {
        Self(BASE64.encode(format!("{CURSOR_PREFIX}{offset}")))
    }

    /// Decode a cursor string back to its offset.
    ///
    /// Only the canonical form produced by [`Cursor::encode`] is accepted:
    /// signs, leading zeros and trailing garbage are rejected.
    pub fn decode(token: &str) -> PaginationResult<usize> {
        let invalid = |reason| PaginationError::InvalidCursor {
            cursor: token.to_string(),
            reason,
        };

        let decoded = BASE64
            .decode(token)
            .map_err(|_| invalid("invalid cursor format"))?;
        let s = String::from_utf8(decoded).map_err(|_| invalid("invalid cursor encoding"))?;
        let digits = s
            .strip_prefix(CURSOR_PREFIX)
            .ok_or_else(|| invalid("invalid cursor prefix"))?;

        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(invalid("invalid cursor value"));
        }

        digits.parse().map_err(|_| invalid("cursor offset out of range"))
    }

    /// The offset this cursor points at
    pub fn offset(&self) -> PaginationResult<usize> {
        Self::decode(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn raw(s: &str) -> String {
        BASE64.encode(s)
    }

    #[test]
    fn test_cursor_roundtrip() {
        for offset in [0, 1, 100, 999999, usize::MAX] {
            let cursor = Cursor::encode(offset);
            assert_eq!(Cursor::decode(cursor.as_str()).unwrap(), offset);
            assert_eq!(cursor.offset().unwrap(), offset);
        }
    }

    #[test]
    fn test_cursor_is_stable() {
        assert_eq!(Cursor::encode(42), Cursor::encode(42));
        assert_eq!(Cursor::encode(2).as_str(), "Y3Vyc29yOjI=");
    }

    #[test]
    fn test_rejects_garbage() {
        assert_matches!(
            Cursor::decode("not base64!!"),
            Err(PaginationError::InvalidCursor { reason: "invalid cursor format", .. })
        );
        assert_matches!(
            Cursor::decode(""),
            Err(PaginationError::InvalidCursor { reason: "invalid cursor prefix", .. })
        );
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        assert_matches!(
            Cursor::decode(&raw("arrayconnection:3")),
            Err(PaginationError::InvalidCursor { reason: "invalid cursor prefix", .. })
        );
    }

    #[test]
    fn test_rejects_non_canonical_offsets() {
        for value in ["cursor:-1", "cursor:+1", "cursor:01", "cursor:", "cursor:1x", "cursor: 1"] {
            assert_matches!(
                Cursor::decode(&raw(value)),
                Err(PaginationError::InvalidCursor { reason: "invalid cursor value", .. }),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overflowing_offset() {
        let token = raw("cursor:999999999999999999999999999999");
        assert_matches!(
            Cursor::decode(&token),
            Err(PaginationError::InvalidCursor { reason: "cursor offset out of range", .. })
        );
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let token = BASE64.encode([0xff, 0xfe, 0xfd]);
        assert_matches!(
            Cursor::decode(&token),
            Err(PaginationError::InvalidCursor { reason: "invalid cursor encoding", .. })
        );
    }
}

//! Test-vector generators for boundary probing.
//!
//! Pure functions with no side effects: control-character vectors split
//! into the terminating and rejecting sets, and padded cookie strings for
//! length-limit probing.

/// A control character paired with its code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtlVector {
    pub code: u8,
    pub chr: char,
}

/// The control characters of RFC 5234 (%x00-1F / %x7F), partitioned by
/// their effect on a cookie line.
#[derive(Debug, Clone)]
pub struct CtlCharacters {
    /// NUL, LF, CR: terminate the cookie string at their position.
    pub terminating: Vec<CtlVector>,
    /// Every other control character: rejects the cookie outright.
    pub rejecting: Vec<CtlVector>,
}

const TERMINATING_CODES: [u8; 3] = [0x00, 0x0A, 0x0D];

/// Enumerate all control characters, split into terminating vs rejecting.
pub fn ctl_characters() -> CtlCharacters {
    let terminating = TERMINATING_CODES
        .iter()
        .map(|&code| CtlVector {
            code,
            chr: code as char,
        })
        .collect();

    let rejecting = (0x00u8..0x20)
        .filter(|code| !TERMINATING_CODES.contains(code))
        .chain(std::iter::once(0x7F))
        .map(|code| CtlVector {
            code,
            chr: code as char,
        })
        .collect();

    CtlCharacters {
        terminating,
        rejecting,
    }
}

/// Build a cookie string with name `"t"` repeated `name_length` times and
/// value `"1"` repeated `value_length` times. Passing 0 for either allows
/// creating a name- or value-less cookie; `(0, 0)` yields `"="`.
pub fn cookie_string_with_name_and_value_lengths(
    name_length: usize,
    value_length: usize,
) -> String {
    format!("{}={}", "t".repeat(name_length), "1".repeat(value_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_complete() {
        let ctls = ctl_characters();
        assert_eq!(ctls.terminating.len(), 3);
        assert_eq!(ctls.rejecting.len(), 30);
        for v in &ctls.terminating {
            assert!(matches!(v.code, 0x00 | 0x0A | 0x0D));
        }
        for v in &ctls.rejecting {
            assert!(v.code < 0x20 || v.code == 0x7F);
            assert!(!matches!(v.code, 0x00 | 0x0A | 0x0D));
            assert_eq!(v.chr as u32, v.code as u32);
        }
    }

    #[test]
    fn test_length_builder_boundaries() {
        assert_eq!(cookie_string_with_name_and_value_lengths(0, 0), "=");
        assert_eq!(cookie_string_with_name_and_value_lengths(2, 3), "tt=111");
        assert_eq!(cookie_string_with_name_and_value_lengths(0, 2), "=11");
    }
}

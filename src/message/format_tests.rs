//! Tests for the timestamp and color helpers.

use super::{parse_color, timestamp, timestamp_with, try_parse_color};
use crate::time::Clock;
use std::time::{Duration, SystemTime};

/// Clock pinned to a fixed instant.
struct FixedClock(SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

mod timestamps {
    use super::*;

    #[test]
    fn pinned_clock_formats_exactly() {
        // 2021-01-02T03:04:05 UTC
        let clock = FixedClock(SystemTime::UNIX_EPOCH + Duration::from_secs(1_609_556_645));

        assert_eq!(timestamp_with(&clock), "2021-01-02T03:04:05+0000");
    }

    #[test]
    fn epoch_formats_with_numeric_utc_offset() {
        let clock = FixedClock(SystemTime::UNIX_EPOCH);

        assert_eq!(timestamp_with(&clock), "1970-01-01T00:00:00+0000");
    }

    #[test]
    fn current_time_matches_the_wire_pattern() {
        let value = timestamp();
        let bytes = value.as_bytes();

        // YYYY-MM-DDTHH:MM:SS±HHMM, fixed width
        assert_eq!(bytes.len(), 24, "unexpected length: {value}");
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-', "{value}"),
                10 => assert_eq!(*b, b'T', "{value}"),
                13 | 16 => assert_eq!(*b, b':', "{value}"),
                19 => assert!(*b == b'+' || *b == b'-', "{value}"),
                _ => assert!(b.is_ascii_digit(), "{value}"),
            }
        }
    }
}

mod colors {
    use super::*;

    #[test]
    fn parses_with_and_without_hash_prefix() {
        assert_eq!(parse_color("#00ff00"), 65280);
        assert_eq!(parse_color("00ff00"), 65280);
        assert_eq!(parse_color("#ff0000"), 0xFF0000);
        assert_eq!(parse_color("0000ff"), 255);
    }

    #[test]
    fn strips_every_hash_regardless_of_position() {
        assert_eq!(parse_color("00#ff#00"), 65280);
    }

    #[test]
    fn uppercase_digits_are_accepted() {
        assert_eq!(parse_color("#00FF00"), 65280);
    }

    #[test]
    fn malformed_input_yields_zero() {
        assert_eq!(parse_color("zz"), 0);
        assert_eq!(parse_color(""), 0);
        assert_eq!(parse_color("#"), 0);
        assert_eq!(parse_color("#00ff0g"), 0);
    }

    #[test]
    fn strict_variant_surfaces_the_failure() {
        let err = try_parse_color("zz").unwrap_err();
        assert_eq!(err.input, "zz");

        assert_eq!(try_parse_color("#00ff00"), Ok(65280));
    }
}

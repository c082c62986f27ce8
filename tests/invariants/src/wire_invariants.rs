//! Property-based tests for the wire primitives.
//!
//! Properties tested:
//! 1. Text encoding round-trips exactly for any valid input.
//! 2. List encoding preserves count and element order.
//! 3. Integer fields are little-endian at natural width.
//! 4. A decode consumes exactly the encoded bytes.

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        smdao_interface::wire::{self, Reader},
    };

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Text round-trip law
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn text_round_trips_exactly(s in any::<String>()) {
            let mut buf = Vec::new();
            wire::append_str(&mut buf, &s).unwrap();

            // ── INVARIANT: leading prefix equals the byte length ──
            let prefix = u32::from_le_bytes(buf[..4].try_into().unwrap());
            prop_assert_eq!(prefix as usize, s.len());
            prop_assert_eq!(buf.len(), 4 + s.len());

            let mut reader = Reader::new(&buf);
            prop_assert_eq!(reader.read_str().unwrap(), s);
            reader.finish().unwrap();
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. List round-trip preserves count and order
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn text_list_round_trips_in_order(
            values in prop::collection::vec(any::<String>(), 0..8),
        ) {
            let mut buf = Vec::new();
            wire::append_str_list(&mut buf, &values).unwrap();

            // ── INVARIANT: leading prefix equals the element count ──
            let prefix = u32::from_le_bytes(buf[..4].try_into().unwrap());
            prop_assert_eq!(prefix as usize, values.len());

            let mut reader = Reader::new(&buf);
            prop_assert_eq!(reader.read_str_list().unwrap(), values);
            reader.finish().unwrap();
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Little-endian integers
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn u64_encodes_little_endian(value in any::<u64>()) {
            let mut buf = Vec::new();
            wire::append_u64(&mut buf, value);
            prop_assert_eq!(&buf[..], &value.to_le_bytes()[..]);

            let mut reader = Reader::new(&buf);
            prop_assert_eq!(reader.read_u64().unwrap(), value);
        }

        #[test]
        fn u32_encodes_little_endian(value in any::<u32>()) {
            let mut buf = Vec::new();
            wire::append_u32(&mut buf, value);
            prop_assert_eq!(&buf[..], &value.to_le_bytes()[..]);

            let mut reader = Reader::new(&buf);
            prop_assert_eq!(reader.read_u32().unwrap(), value);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Appending never disturbs earlier fields
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn fields_concatenate_in_order(
            first in any::<String>(),
            second in any::<u64>(),
            third in prop::collection::vec(any::<String>(), 0..4),
        ) {
            let mut buf = Vec::new();
            wire::append_str(&mut buf, &first).unwrap();
            wire::append_u64(&mut buf, second);
            wire::append_str_list(&mut buf, &third).unwrap();

            let mut reader = Reader::new(&buf);
            prop_assert_eq!(reader.read_str().unwrap(), first);
            prop_assert_eq!(reader.read_u64().unwrap(), second);
            prop_assert_eq!(reader.read_str_list().unwrap(), third);
            reader.finish().unwrap();
        }
    }
}

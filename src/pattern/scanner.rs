// Wed Feb 04 2026 - Alex

use crate::pattern::Pattern;

/// Wildcard-aware Boyer-Moore-Horspool search.
///
/// Windows advance left to right, bytes compare right to left, and the
/// skip on a mismatch comes from a 256-entry shift table indexed by the
/// region byte under the pattern's last position. The maximum shift is
/// clamped to the distance between the rightmost wildcard and the end of
/// the pattern: a larger skip could jump past an alignment the wildcard
/// would have matched.
///
/// Returns the offset of the first match. An empty pattern never matches;
/// a pattern longer than `data` never matches. Single-byte patterns are
/// treated as wildcard-free with a shift of 1.
pub fn find_first(data: &[u8], sig: &Pattern) -> Option<usize> {
    let length = sig.len();
    if length == 0 || data.len() < length {
        return None;
    }

    let last = length - 1;
    let bytes = sig.bytes();
    let mask = sig.mask();

    // Rightmost wildcard strictly before the last position caps the shift.
    let mut shift_max = length;
    let mut wildcard = None;
    for i in (0..last).rev() {
        if !mask[i] {
            shift_max = last - i;
            wildcard = Some(i);
            break;
        }
    }

    let mut shift_table = [shift_max; 256];

    // Known bytes trailing the wildcard pick their own shift; the last
    // position is excluded so a full-window mismatch still advances.
    let table_start = wildcard.map_or(0, |w| w + 1);
    for i in table_start..last {
        shift_table[bytes[i] as usize] = last - i;
    }

    let mut cur = 0;
    while cur + length <= data.len() {
        let mut matched = true;
        for i in (0..length).rev() {
            if mask[i] && bytes[i] != data[cur + i] {
                matched = false;
                break;
            }
        }

        if matched {
            return Some(cur);
        }

        cur += shift_table[data[cur + last] as usize];
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternBuilder;

    // Reference implementation: try every window, wildcard matches
    // anything.
    fn naive_find(data: &[u8], sig: &Pattern) -> Option<usize> {
        if sig.is_empty() || data.len() < sig.len() {
            return None;
        }
        (0..=data.len() - sig.len()).find(|&start| {
            sig.mask()
                .iter()
                .zip(sig.bytes())
                .enumerate()
                .all(|(i, (&m, &b))| !m || data[start + i] == b)
        })
    }

    fn pseudo_random_bytes(len: usize, mut seed: u64) -> Vec<u8> {
        (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                (seed & 0xff) as u8
            })
            .collect()
    }

    #[test]
    fn test_wildcard_match_mid_region() {
        let data = [0x10, 0x48, 0x99, 0x05, 0x20];
        let sig = Pattern::parse("48 ?? 05").unwrap();
        assert_eq!(find_first(&data, &sig), Some(1));
    }

    #[test]
    fn test_single_byte_pattern() {
        let data = [0xBB, 0xAA, 0xCC];
        let sig = Pattern::from_bytes(&[0xAA]);
        assert_eq!(find_first(&data, &sig), Some(1));
        assert_eq!(find_first(&data, &Pattern::from_bytes(&[0xDD])), None);
    }

    #[test]
    fn test_match_at_start_and_end() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(find_first(&data, &Pattern::from_bytes(&[0x01, 0x02])), Some(0));
        assert_eq!(find_first(&data, &Pattern::from_bytes(&[0x04, 0x05])), Some(3));
    }

    #[test]
    fn test_pattern_longer_than_region() {
        let data = [0x01, 0x02];
        let sig = Pattern::from_bytes(&[0x01, 0x02, 0x03]);
        assert_eq!(find_first(&data, &sig), None);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let data = [0x01, 0x02];
        let sig = Pattern::new(Vec::new(), Vec::new());
        assert_eq!(find_first(&data, &sig), None);
    }

    #[test]
    fn test_trailing_wildcard() {
        // Last position is a wildcard; shift still comes from the byte
        // aligned with it.
        let data = [0x00, 0x48, 0x8B, 0x7F, 0x00];
        let sig = Pattern::parse("48 8B ??").unwrap();
        assert_eq!(find_first(&data, &sig), Some(1));
    }

    #[test]
    fn test_leading_wildcard() {
        let data = [0x10, 0x20, 0x30, 0x40];
        let sig = Pattern::parse("?? 30").unwrap();
        assert_eq!(find_first(&data, &sig), Some(1));
    }

    #[test]
    fn test_repeated_prefix_not_skipped() {
        // Near-miss windows force shifts through the wildcard cap.
        let data = [0x48, 0x48, 0x48, 0x05, 0x48, 0x48, 0x05];
        let sig = Pattern::parse("48 ?? 05").unwrap();
        assert_eq!(find_first(&data, &sig), naive_find(&data, &sig));
        assert_eq!(find_first(&data, &sig), Some(1));
    }

    #[test]
    fn test_exact_patterns_agree_with_naive_search() {
        let data = pseudo_random_bytes(4096, 0x1234_5678_9abc_def0);
        for start in [0usize, 57, 1023, 2048, 4090] {
            for len in [1usize, 2, 5, 16] {
                if start + len > data.len() {
                    continue;
                }
                let sig = Pattern::from_bytes(&data[start..start + len]);
                assert_eq!(
                    find_first(&data, &sig),
                    naive_find(&data, &sig),
                    "exact sig at {}..{}",
                    start,
                    start + len
                );
            }
        }
    }

    #[test]
    fn test_wildcard_patterns_agree_with_naive_search() {
        let data = pseudo_random_bytes(2048, 0xfeed_face_cafe_beef);
        for start in [3usize, 511, 1200, 2040] {
            let window = &data[start..start + 8];
            for wildcard_at in 0..window.len() {
                let mut builder = PatternBuilder::new();
                for (i, &b) in window.iter().enumerate() {
                    builder = if i == wildcard_at {
                        builder.wildcard()
                    } else {
                        builder.byte(b)
                    };
                }
                let sig = builder.build();
                let found = find_first(&data, &sig);
                assert_eq!(found, naive_find(&data, &sig), "wildcard at {}", wildcard_at);
                assert!(found.is_some());
                assert!(found.unwrap() <= start);
            }
        }
    }

    #[test]
    fn test_heavy_wildcards() {
        let data = pseudo_random_bytes(1024, 0x0123_4567_89ab_cdef);
        let window = &data[300..310];
        let sig = PatternBuilder::new()
            .byte(window[0])
            .wildcards(8)
            .byte(window[9])
            .build();
        assert_eq!(find_first(&data, &sig), naive_find(&data, &sig));
    }
}

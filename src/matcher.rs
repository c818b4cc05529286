//! Approximate suffix search for adapter fragments within a read.

/// No-call bases in an adapter match any read base unconditionally.
#[inline]
fn is_no_call(base: u8) -> bool {
    matches!(base, b'N' | b'n' | b'.')
}

/// Case-insensitive base comparison.
#[inline]
fn bases_equal(a: u8, b: u8) -> bool {
    a.to_ascii_uppercase() == b.to_ascii_uppercase()
}

/// Find the 0-based offset in `read` at which `target` begins, tolerating a
/// bounded fraction of mismatching bases.
///
/// Candidate start offsets are scanned from `read.len() - min_match_bases`
/// down to 0, and the first offset whose overlap with `target` stays within
/// `floor(overlap_len * max_error_rate)` mismatches is returned immediately.
/// Adapters sit past the 3' end of the insert, so the scan prefers the
/// offset closest to the read's end over any leftward alternative; this
/// rightmost bias is part of the contract.
///
/// A read shorter than `min_match_bases` yields `None`. That is a normal
/// outcome for short reads, not an error.
pub fn find_clip_offset(
    read: &[u8],
    target: &[u8],
    min_match_bases: usize,
    max_error_rate: f64,
) -> Option<usize> {
    // Too short to ever satisfy the minimum overlap.
    if read.len() < min_match_bases {
        return None;
    }

    // Walk backwards down the read looking for the target.
    'scan: for start in (0..=read.len() - min_match_bases).rev() {
        let len = (read.len() - start).min(target.len());
        let mismatches_allowed = (len as f64 * max_error_rate) as usize;
        let mut mismatches = 0;

        for i in 0..len {
            if !is_no_call(target[i]) && !bases_equal(target[i], read[start + i]) {
                mismatches += 1;
                if mismatches > mismatches_allowed {
                    continue 'scan;
                }
            }
        }

        return Some(start);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_suffix_match() {
        let read = b"ACGTTGCAACGGTTAACCGGAGATCGGAAG";
        assert_eq!(find_clip_offset(read, b"AGATCGGAAG", 8, 0.0), Some(20));
    }

    #[test]
    fn no_match_on_unrelated_target() {
        let read = b"ACGTTGCAACGGTTAACCGG";
        assert_eq!(find_clip_offset(read, b"TTTTTTTTTTTT", 8, 0.0), None);
    }

    #[test]
    fn short_read_guard() {
        assert_eq!(find_clip_offset(b"ACGT", b"ACGTACGTACGT", 12, 0.1), None);
        assert_eq!(find_clip_offset(b"", b"ACGTACGTACGT", 1, 0.1), None);
    }

    #[test]
    fn rightmost_occurrence_wins() {
        // Target appears at offsets 4 and 20.
        let read = b"GTGTAAAACCCCGTGTGTGTAAAACCCC";
        assert_eq!(find_clip_offset(read, b"AAAACCCC", 4, 0.0), Some(20));
        // With only the left occurrence present, it is found.
        assert_eq!(find_clip_offset(&read[..16], b"AAAACCCC", 4, 0.0), Some(4));
    }

    #[test]
    fn partial_suffix_overlap() {
        // Only the first 6 adapter bases fit on the read.
        let read = b"TTCCAAGGCCTTGGAGATCG";
        assert_eq!(find_clip_offset(read, b"AGATCGGAAGAG", 6, 0.0), Some(14));
    }

    #[test]
    fn mismatch_budget_is_floored() {
        // Overlap 10 at 10% error allows exactly one mismatch.
        let target = b"AGATCGGAAG";
        let one_off = b"AGATCGGATG";
        let two_off = b"AGATCGCATG";
        assert_eq!(find_clip_offset(one_off, target, 10, 0.1), Some(0));
        assert_eq!(find_clip_offset(two_off, target, 10, 0.1), None);
        // 19% still floors to a single allowed mismatch.
        assert_eq!(find_clip_offset(two_off, target, 10, 0.19), None);
        assert_eq!(find_clip_offset(two_off, target, 10, 0.2), Some(0));
    }

    #[test]
    fn no_calls_in_target_match_anything() {
        let read = b"ACGTTGCAACGGTTAACCGGAGATCGGAAG";
        assert_eq!(find_clip_offset(read, b"AGANCGGAAG", 8, 0.0), Some(20));
        assert_eq!(find_clip_offset(read, b"AGA.CGGAAG", 8, 0.0), Some(20));
        // Replacing a base with a no-call never loses an existing match.
        assert_eq!(find_clip_offset(read, b"NNNNNNNNNN", 8, 0.0), Some(20));
    }

    #[test]
    fn comparison_ignores_case() {
        assert_eq!(
            find_clip_offset(b"agatcggaagag", b"AGATCGGAAGAG", 12, 0.0),
            Some(0)
        );
    }

    #[test]
    fn no_call_in_read_is_a_mismatch() {
        // A no-call on the read side does not get a free pass.
        assert_eq!(find_clip_offset(b"AGATCGGAANNN", b"AGATCGGAAGAG", 12, 0.0), None);
    }
}

//! Adapter candidates and stock Illumina sequences.

use std::borrow::Cow;

use lazy_static::lazy_static;
use needletail::Sequence;
use serde::{Deserialize, Serialize};

use crate::read::MateRole;

/// Illumina R1 adapter sequence included in gel-beads.
pub const ILLUMINA_R1_SHORT: &str = "CTACACGACGCTCTTCCGATCT";

/// Reverse complement of the Illumina R1 adapter sequence.
pub const ILLUMINA_R1_SHORT_RC: &str = "AGATCGGAAGAGCGTCGTGTAG";

/// Illumina R2 adapter sequence.
pub const ILLUMINA_R2: &str = "GTGACTGGAGTTCAGACGTGTGCTCTTCCGATCT";

/// Reverse complement of the Illumina R2 adapter sequence.
pub const ILLUMINA_R2_RC: &str = "AGATCGGAAGAGCACACGTCTGAACTCCAGTCAC";

/// A candidate adapter pair: the 5' and 3' adapters of one library design.
///
/// Sequences are stored as ligated, 5' to 3'. The fragment a given mate
/// actually reads through is obtained with [`AdapterPair::fragment`]; for
/// the second mate that is the reverse complement of the 5' adapter, since
/// read 2 sequences back across it. Sequences may contain no-call bases
/// (`N`, `n`, `.`), which match any read base.
///
/// The fields are `String`s rather than byte vectors so that candidate
/// lists deserialize directly from configuration:
/// ```
/// use readclip::AdapterPair;
/// let pair = AdapterPair::new("custom", "CTCTTCCGATCT", "AGATCGGAAGAG");
/// assert_eq!(pair.three_prime, "AGATCGGAAGAG");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdapterPair {
    pub name: String,
    /// 5' adapter sequence, as ligated.
    pub five_prime: String,
    /// 3' adapter sequence, as read by the first mate.
    pub three_prime: String,
}

impl AdapterPair {
    pub fn new(
        name: impl ToString,
        five_prime: impl ToString,
        three_prime: impl ToString,
    ) -> Self {
        Self {
            name: name.to_string(),
            five_prime: five_prime.to_string(),
            three_prime: three_prime.to_string(),
        }
    }

    /// The adapter fragment the given mate reads through, in read order.
    pub fn fragment(&self, role: MateRole) -> Cow<'_, [u8]> {
        match role {
            MateRole::First => Cow::Borrowed(self.three_prime.as_bytes()),
            MateRole::Second => Cow::Owned(self.five_prime.as_bytes().reverse_complement()),
        }
    }
}

lazy_static! {
    /// Stock Illumina paired-end design: read 1 runs into the reverse
    /// complement of the R2 adapter, read 2 into the reverse complement of
    /// the R1 adapter.
    pub static ref ILLUMINA_PAIRED_END: AdapterPair =
        AdapterPair::new("illumina_paired_end", ILLUMINA_R1_SHORT, ILLUMINA_R2_RC);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mate_fragment_is_the_three_prime_adapter() {
        let fragment = ILLUMINA_PAIRED_END.fragment(MateRole::First);
        assert_eq!(fragment.as_ref(), ILLUMINA_R2_RC.as_bytes());
    }

    #[test]
    fn second_mate_fragment_is_the_five_prime_reverse_complement() {
        let fragment = ILLUMINA_PAIRED_END.fragment(MateRole::Second);
        assert_eq!(fragment.as_ref(), ILLUMINA_R1_SHORT_RC.as_bytes());
    }

    #[test]
    fn no_calls_survive_fragment_orientation() {
        let pair = AdapterPair::new("nocall", "ANCGT", "ACGT");
        assert_eq!(pair.fragment(MateRole::Second).as_ref(), b"ACGNT");
    }
}

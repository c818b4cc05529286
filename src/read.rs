use std::borrow::Cow;

use needletail::Sequence;
use serde::{Deserialize, Serialize};

use crate::errors::*;

/// Strand orientation recorded on a read by the aligner.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strand {
    #[serde(rename = "forward")]
    Forward,
    #[serde(rename = "reverse")]
    Reverse,
}

/// Which mate of a sequenced pair a read is.
///
/// The role decides which adapter fragment orientation applies during
/// matching: the first mate reads into the 3' adapter, the second mate into
/// the reverse complement of the 5' adapter.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MateRole {
    #[serde(rename = "first")]
    First,
    #[serde(rename = "second")]
    Second,
}

impl MateRole {
    /// Convert a 1-based template index into a role. Single-ended reads use
    /// index 1. Any other value is a configuration error.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            1 => Ok(MateRole::First),
            2 => Ok(MateRole::Second),
            _ => Err(Error::InvalidMateRole { index }),
        }
    }
}

/// Seam to an external record model (SAM/BAM record, fastq entry, ...).
///
/// Matching only reads `bases` and `strand`; `set_clip_position` is the one
/// mutation point, called at most once per record per clipping call with the
/// 1-based position where adapter contamination begins. How the position is
/// persisted (e.g. as an integer-valued record tag) is up to the
/// implementor.
pub trait ClipRecord {
    fn bases(&self) -> &[u8];

    fn strand(&self) -> Strand;

    fn set_clip_position(&mut self, position: usize);
}

/// Owned read, for callers without their own record model and for tests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Read {
    bases: Vec<u8>,
    strand: Strand,
    clip_position: Option<usize>,
}

impl Read {
    pub fn new(bases: Vec<u8>, strand: Strand) -> Self {
        Self {
            bases,
            strand,
            clip_position: None,
        }
    }

    /// The assigned 1-based clip position, if any.
    pub fn clip_position(&self) -> Option<usize> {
        self.clip_position
    }
}

impl ClipRecord for Read {
    fn bases(&self) -> &[u8] {
        &self.bases
    }

    fn strand(&self) -> Strand {
        self.strand
    }

    fn set_clip_position(&mut self, position: usize) {
        self.clip_position = Some(position);
    }
}

/// Return the read bases in sequencing order.
///
/// Reverse-strand reads are stored reference-oriented, so a copy is
/// reverse-complemented before matching; forward-strand reads are borrowed
/// as-is. No-call bases complement to themselves.
pub fn oriented_bases<R: ClipRecord + ?Sized>(read: &R) -> Cow<'_, [u8]> {
    match read.strand() {
        Strand::Forward => Cow::Borrowed(read.bases()),
        Strand::Reverse => Cow::Owned(read.bases().reverse_complement()),
    }
}

//! Adapter detection and clip-position assignment for sequencing reads.
//!
//! # Overview
//! Library preparation leaves known adapter fragments at the 3' end of reads
//! whose inserts are shorter than the read length. `readclip` locates those
//! fragments with a bounded mismatch rate and reports the position where the
//! contamination begins, so callers can soft-clip or trim the tail.
//!
//! This is useful for:
//! * Marking adapter read-through before alignment
//! * Reconciling trim points across the two mates of a pair
//! * Building custom trimming tools on top of an existing record model
//!
//! ## Matching
//! [`find_clip_offset`] scans candidate start positions from the 3' end of
//! the read toward the 5' end and accepts the first position whose overlap
//! with the adapter stays within the mismatch budget
//! (`floor(overlap_len * max_error_rate)`). No-call bases (`N`, `n`, `.`)
//! in the adapter match any read base, and comparison is case-insensitive.
//! The scan direction makes the result the *rightmost* acceptable position,
//! which is the conservative choice: a wrong leftward call would discard
//! real sequence.
//!
//! ## Candidates and pairs
//! An [`AdapterPair`] carries both the 5' and 3' adapter of a library
//! design. The first mate of a pair is matched against the 3' adapter; the
//! second mate against the reverse complement of the 5' adapter, which is
//! the form it appears in when sequenced. [`select_adapter`] tries a
//! prioritized candidate list and stops at the first hit.
//!
//! For paired reads, [`reconcile_pair`] demands agreement between the mates:
//! an identical offset on both sides wins outright, while single-ended
//! evidence is only accepted after a stricter residual-length check.
//!
//! ## Records
//! Reads enter through the [`ClipRecord`] trait, which exposes bases, strand
//! orientation, and a single setter for the 1-based clip position. Matching
//! itself is pure; only [`clip_single_read`] and [`clip_paired_reads`] write
//! through the setter, at most once per record. A plain [`Read`] struct is
//! provided for callers without their own record model.
//!
//! ```
//! use readclip::{clip_single_read, AdapterPair, ClipConfig, MateRole, Read, Strand};
//!
//! let pair = AdapterPair::new("custom", "CTCTTCCGATCT", "AGATCGGAAGAG");
//! let mut read = Read::new(b"TTCCAAGGAGATCGGAAGAG".to_vec(), Strand::Forward);
//!
//! let found = clip_single_read(
//!     &mut read,
//!     MateRole::First,
//!     std::slice::from_ref(&pair),
//!     ClipConfig {
//!         min_match_bases: 6,
//!         max_error_rate: 0.1,
//!     },
//! );
//! assert!(found.is_some());
//! // The adapter starts at base 9 (1-based).
//! assert_eq!(read.clip_position(), Some(9));
//! ```

pub mod errors;

mod adapters;
mod clip;
mod matcher;
mod read;

// commonly used functions and types

pub use crate::adapters::*;
pub use crate::clip::*;
pub use crate::matcher::find_clip_offset;
pub use crate::read::*;

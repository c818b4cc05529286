//! Adapter selection for single reads and reconciliation across mates.

use serde::{Deserialize, Serialize};

use crate::adapters::AdapterPair;
use crate::errors::*;
use crate::matcher::find_clip_offset;
use crate::read::{oriented_bases, ClipRecord, MateRole};

/// Default minimum overlap length for single-read matching.
pub const MIN_MATCH_BASES: usize = 12;

/// Default minimum overlap length for paired-read matching. Agreement
/// between mates supports a looser threshold than a single read can.
pub const MIN_MATCH_PE_BASES: usize = 6;

/// Default mismatch-rate budget for single-read matching.
pub const MAX_ERROR_RATE: f64 = 0.10;

/// Default mismatch-rate budget for paired-read matching.
pub const MAX_PE_ERROR_RATE: f64 = 0.10;

/// Matching thresholds, passed explicitly to every entry point.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ClipConfig {
    /// Minimum overlap length required to consider a candidate offset.
    pub min_match_bases: usize,
    /// Fraction in [0, 1] of the overlap allowed to mismatch.
    pub max_error_rate: f64,
}

impl ClipConfig {
    /// Historical single-read defaults (12 bases, 10% errors).
    pub fn single_end() -> Self {
        Self {
            min_match_bases: MIN_MATCH_BASES,
            max_error_rate: MAX_ERROR_RATE,
        }
    }

    /// Historical paired-read defaults (6 bases, 10% errors).
    pub fn paired_end() -> Self {
        Self {
            min_match_bases: MIN_MATCH_PE_BASES,
            max_error_rate: MAX_PE_ERROR_RATE,
        }
    }
}

/// Try each candidate in priority order against a single read and return the
/// first that matches, with the 1-based position of the adapter start.
///
/// The read is normalized to sequencing order first, and the fragment
/// matched is the one appropriate for `role`. Candidate order is the
/// tie-break: the scan stops at the first hit rather than looking for a
/// better-scoring one later in the list.
pub fn select_adapter<'a, R: ClipRecord + ?Sized>(
    read: &R,
    role: MateRole,
    adapters: &'a [AdapterPair],
    cfg: ClipConfig,
) -> Option<(&'a AdapterPair, usize)> {
    let bases = oriented_bases(read);
    for adapter in adapters {
        let fragment = adapter.fragment(role);
        if let Some(offset) =
            find_clip_offset(&bases, &fragment, cfg.min_match_bases, cfg.max_error_rate)
        {
            return Some((adapter, offset + 1));
        }
    }

    None
}

/// [`select_adapter`] taking a raw 1-based template index (1 or 2) instead
/// of a [`MateRole`]. Single-ended callers pass 1. Any other index is a
/// configuration error.
pub fn select_adapter_indexed<'a, R: ClipRecord + ?Sized>(
    read: &R,
    template_index: usize,
    adapters: &'a [AdapterPair],
    cfg: ClipConfig,
) -> Result<Option<(&'a AdapterPair, usize)>> {
    Ok(select_adapter(
        read,
        MateRole::from_index(template_index)?,
        adapters,
        cfg,
    ))
}

/// Run [`select_adapter`] and, on a hit, store the 1-based clip position on
/// the read. Returns the matched candidate; the read is left unmodified when
/// nothing matches.
pub fn clip_single_read<'a, R: ClipRecord + ?Sized>(
    read: &mut R,
    role: MateRole,
    adapters: &'a [AdapterPair],
    cfg: ClipConfig,
) -> Option<&'a AdapterPair> {
    let (adapter, position) = select_adapter(&*read, role, adapters, cfg)?;
    read.set_clip_position(position);
    Some(adapter)
}

/// Outcome of reconciling adapter matches across the two mates of a pair.
///
/// `position` is the 1-based clip position in both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedClip<'a> {
    /// Both mates matched the candidate at the same offset. The strongest
    /// evidence; applies to both reads unconditionally.
    Agreement {
        adapter: &'a AdapterPair,
        position: usize,
    },
    /// Exactly one mate matched and the match survived the stricter
    /// residual-length check. Applies to each read only if the read is long
    /// enough to accept the position.
    OneSided {
        adapter: &'a AdapterPair,
        position: usize,
    },
}

impl<'a> PairedClip<'a> {
    pub fn adapter(&self) -> &'a AdapterPair {
        match self {
            PairedClip::Agreement { adapter, .. } | PairedClip::OneSided { adapter, .. } => adapter,
        }
    }

    /// The 1-based clip position.
    pub fn position(&self) -> usize {
        match self {
            PairedClip::Agreement { position, .. } | PairedClip::OneSided { position, .. } => {
                *position
            }
        }
    }
}

/// Reconcile independent single-end matches on both mates into one
/// consistent outcome, without mutating either read.
///
/// For each candidate, in priority order, the first mate is matched against
/// the 3' fragment and the second against the 5' fragment in read order:
/// * identical real offsets on both sides win outright and stop the scan;
/// * a match on exactly one side is kept as the running best, but only if
///   the matched read retains at least `2 * min_match_bases` bases past the
///   offset — single-ended evidence is accepted only under tightened
///   stringency, and a later one-sided hit replaces an earlier one;
/// * matches at different offsets, or no match on either side, are skipped.
pub fn reconcile_pair<'a, R: ClipRecord + ?Sized>(
    read1: &R,
    read2: &R,
    adapters: &'a [AdapterPair],
    cfg: ClipConfig,
) -> Option<PairedClip<'a>> {
    let bases1 = oriented_bases(read1);
    let bases2 = oriented_bases(read2);
    let mut best = None;

    for adapter in adapters {
        let index1 = find_clip_offset(
            &bases1,
            &adapter.fragment(MateRole::First),
            cfg.min_match_bases,
            cfg.max_error_rate,
        );
        let index2 = find_clip_offset(
            &bases2,
            &adapter.fragment(MateRole::Second),
            cfg.min_match_bases,
            cfg.max_error_rate,
        );

        match (index1, index2) {
            (Some(offset1), Some(offset2)) if offset1 == offset2 => {
                return Some(PairedClip::Agreement {
                    adapter,
                    position: offset1 + 1,
                });
            }
            (Some(offset), None) | (None, Some(offset)) => {
                // One mate matched. Keep it only if enough of the matched
                // read lies past the offset; keep scanning for an agreement,
                // which would override this.
                let matched_len = if index1.is_some() {
                    bases1.len()
                } else {
                    bases2.len()
                };
                if matched_len - offset >= 2 * cfg.min_match_bases {
                    best = Some(PairedClip::OneSided {
                        adapter,
                        position: offset + 1,
                    });
                }
            }
            // Matched at different offsets, or matched neither mate.
            _ => {}
        }
    }

    best
}

/// Run [`reconcile_pair`] and store the resulting 1-based clip position on
/// the reads. An agreement is written to both mates; a one-sided result is
/// written to each mate independently, skipping any read too short to hold
/// the position. Each read is written at most once.
pub fn clip_paired_reads<'a, R: ClipRecord + ?Sized>(
    read1: &mut R,
    read2: &mut R,
    adapters: &'a [AdapterPair],
    cfg: ClipConfig,
) -> Option<&'a AdapterPair> {
    match reconcile_pair(&*read1, &*read2, adapters, cfg)? {
        PairedClip::Agreement { adapter, position } => {
            read1.set_clip_position(position);
            read2.set_clip_position(position);
            Some(adapter)
        }
        PairedClip::OneSided { adapter, position } => {
            if read1.bases().len() >= position {
                read1.set_clip_position(position);
            }
            if read2.bases().len() >= position {
                read2.set_clip_position(position);
            }
            Some(adapter)
        }
    }
}

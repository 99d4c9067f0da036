//! Cycle canonicalization
//!
//! Reduces a raw traversal path to its minimal repeating cycle and derives a
//! rotation-invariant signature for deduplication. The same structural cycle
//! discovered from different entry points - and therefore entered at
//! different nodes - must collapse to one signature.

use std::path::PathBuf;

/// Delimiter joining cycle elements in signatures and display output
pub const CYCLE_ARROW: &str = " -> ";

/// Minimal repeating cycle of a traversal path
///
/// `raw_path` is the traversal stack with the repeated node appended at the
/// end; the cycle is the suffix starting at the first occurrence of that
/// final node, discarding any non-repeating prefix: `[A, B, C, B]` becomes
/// `[B, C, B]`. Empty and single-element inputs pass through unchanged.
pub fn minimal_cycle(raw_path: &[PathBuf]) -> Vec<PathBuf> {
    let Some(last) = raw_path.last() else {
        return Vec::new();
    };
    if raw_path.len() == 1 {
        return raw_path.to_vec();
    }
    let first = raw_path
        .iter()
        .position(|file| file == last)
        .unwrap_or(raw_path.len() - 1);
    raw_path[first..].to_vec()
}

/// Rotation-invariant signature of a cycle
///
/// Computes the minimal cycle, rotates it (excluding the closing repeated
/// element) so its lexicographically smallest element leads, re-appends the
/// closing element, and joins everything with [`CYCLE_ARROW`]. Rotations of
/// the same cycle, or the same sequence collected by independent traversals,
/// yield byte-identical signatures.
pub fn cycle_signature(raw_path: &[PathBuf]) -> String {
    let cycle = minimal_cycle(raw_path);
    if cycle.len() <= 1 {
        return cycle
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>()
            .join(CYCLE_ARROW);
    }

    let body: Vec<String> = cycle[..cycle.len() - 1]
        .iter()
        .map(|file| file.display().to_string())
        .collect();
    let smallest = body
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(index, _)| index)
        .unwrap_or(0);

    let mut rotated: Vec<&str> = (0..body.len())
        .map(|step| body[(smallest + step) % body.len()].as_str())
        .collect();
    rotated.push(rotated[0]);
    rotated.join(CYCLE_ARROW)
}

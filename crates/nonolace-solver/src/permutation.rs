//! Enumeration of all hint-consistent arrangements of a line.

use nonolace_core::CellStatus;

/// Enumerates every arrangement of a line consistent with its hints and with
/// the cells that are already known.
///
/// Each returned permutation is a fully decided line (`true` = filled) that
/// places contiguous filled runs of exactly the hint lengths, in order,
/// separated by at least one empty cell, and that agrees with every
/// [`Filled`](CellStatus::Filled)/[`Empty`](CellStatus::Empty) cell of
/// `line`. The single hint `0` denotes an entirely empty line and yields
/// exactly one permutation (all empty), provided no known cell contradicts
/// it.
///
/// An empty result means the known cells contradict the hints; callers treat
/// that as a fatal invariant violation
/// ([`SolverError::NoLinePermutations`](crate::SolverError::NoLinePermutations)).
///
/// Runs are placed recursively over index ranges into a single scratch
/// buffer, so no intermediate line segments are allocated. The enumeration is
/// exponential in the worst case but tightly bounded by the spacing the hints
/// leave free; lines of a few tens of cells stay cheap.
///
/// # Examples
///
/// ```
/// use nonolace_core::CellStatus::{Empty, Unknown};
/// use nonolace_solver::enumerate_line_permutations;
///
/// // A run of two in four cells has three placements...
/// let permutations = enumerate_line_permutations(&[2], &[Unknown; 4]);
/// assert_eq!(permutations.len(), 3);
///
/// // ...but only one once the first cell is known to be empty and the
/// // second run cell is pinned by the remaining space.
/// let permutations = enumerate_line_permutations(&[3], &[Empty, Unknown, Unknown, Unknown]);
/// assert_eq!(permutations, [[false, true, true, true]]);
/// ```
#[must_use]
pub fn enumerate_line_permutations(hints: &[usize], line: &[CellStatus]) -> Vec<Vec<bool>> {
    debug_assert!(!hints.is_empty(), "hint sequences are never empty");

    // A lone 0 hint marks a line with no filled cells at all.
    if matches!(hints, [0]) {
        if line.iter().all(|cell| cell.admits(false)) {
            return vec![vec![false; line.len()]];
        }
        return Vec::new();
    }
    debug_assert!(
        hints.iter().all(|&run| run > 0),
        "only the lone hint [0] may contain a zero run"
    );

    let mut permutations = Vec::new();
    let mut buffer = vec![false; line.len()];
    place_runs(hints, line, 0, &mut buffer, &mut permutations);
    permutations
}

/// Places `hints[0]` at every legal offset from `start`, recursing on the
/// remaining hints. `buffer[..start]` is already decided.
fn place_runs(
    hints: &[usize],
    line: &[CellStatus],
    start: usize,
    buffer: &mut Vec<bool>,
    out: &mut Vec<Vec<bool>>,
) {
    let (&run, rest) = hints.split_first().expect("placement always has a hint left");
    // Space the remaining runs need, each preceded by one separator cell.
    let rest_space = rest.iter().sum::<usize>() + rest.len();
    let Some(slack) = (line.len() - start).checked_sub(run + rest_space) else {
        return;
    };

    for offset in 0..=slack {
        let run_start = start + offset;
        let run_end = run_start + run;
        if !segment_admits(line, start, run_start, false)
            || !segment_admits(line, run_start, run_end, true)
        {
            continue;
        }
        buffer[start..run_start].fill(false);
        buffer[run_start..run_end].fill(true);

        if rest.is_empty() {
            if segment_admits(line, run_end, line.len(), false) {
                buffer[run_end..].fill(false);
                out.push(buffer.clone());
            }
        } else if line[run_end].admits(false) {
            buffer[run_end] = false;
            place_runs(rest, line, run_end + 1, buffer, out);
        }
    }
}

fn segment_admits(line: &[CellStatus], start: usize, end: usize, filled: bool) -> bool {
    line[start..end].iter().all(|cell| cell.admits(filled))
}

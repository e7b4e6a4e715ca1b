//! Greedy weight-budgeted merging
//!
//! Adjacent fragments are coalesced toward an even partition of the total
//! weight. The target per group is `avg = floor(sum / (floor(sum / max_len) + 1))`;
//! a group is closed once it reaches `avg`, and never grows past `max_len`
//! while it can still be closed instead. A fragment heavier than `max_len`
//! still forms a group of its own: merging never splits a fragment.

use crate::weight::WeightedFragment;

/// Contiguous run of fragments merged into one candidate chunk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeGroup<'a> {
    /// Concatenated text of the members
    pub text: &'a str,
    /// Byte offset within the merged parent text
    pub offset: usize,
    /// Sum of member weights
    pub weight: f64,
    /// Number of member fragments
    pub members: usize,
}

/// Even-split target weight for a total `sum` under `max_len`
pub fn target_weight(sum: f64, max_len: f64) -> f64 {
    let groups = (sum / max_len).floor() + 1.0;
    (sum / groups).floor()
}

/// Merge `fragments`, all slices of `parent`, under `max_len`
pub fn merge<'a>(
    parent: &'a str,
    fragments: &[WeightedFragment<'a>],
    max_len: f64,
) -> Vec<MergeGroup<'a>> {
    let sum: f64 = fragments.iter().map(|f| f.weight).sum();
    let avg = target_weight(sum, max_len);

    // (start, end, weight, members)
    let mut spans: Vec<(usize, usize, f64, usize)> = Vec::new();
    for wf in fragments {
        let start = wf.fragment.offset;
        let end = start + wf.fragment.text.len();
        match spans.last_mut() {
            Some(current) if current.2 < avg && current.2 + wf.weight <= max_len => {
                current.1 = end;
                current.2 += wf.weight;
                current.3 += 1;
            }
            _ => spans.push((start, end, wf.weight, 1)),
        }
    }

    spans
        .into_iter()
        .map(|(start, end, weight, members)| MergeGroup {
            text: &parent[start..end],
            offset: start,
            weight,
            members,
        })
        .collect()
}

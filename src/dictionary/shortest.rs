// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shortest-path dictionary: breadth-first search from byte 0.
//!
//! BFS level equals shortest path length in the unweighted XOR graph, so the
//! first time a node is discovered fixes its minimal codeword. Support bytes
//! are expanded in ascending order; among equal-length paths the first one
//! found wins.
//!
//! The state space is 256 nodes, so the search does O(256 × |support|) work.

use std::collections::VecDeque;

use tracing::debug;

use super::{BuildStatistics, Codeword, Counters, Dictionary, DictionaryKind};
use crate::support::{SupportSet, NBYTES};

/// How a node was first reached: its predecessor and the edge byte used.
#[derive(Debug, Clone, Copy)]
struct Discovery {
    parent: u8,
    edge: u8,
}

/// Build the shortest-path dictionary for `support`.
///
/// Byte 0 maps to the empty codeword. With an empty support set nothing
/// else is reachable and the search ends immediately.
///
/// # Examples
///
/// ```
/// use xor_literal::{shortest_path_dictionary, SupportSet};
///
/// let support = SupportSet::from_bytes(&[3, 5]);
/// let dict = shortest_path_dictionary(&support);
///
/// assert_eq!(dict.len(), 4); // 0, 3, 5, 6
/// assert_eq!(dict.get(6).unwrap().as_slice(), &[3, 5]);
/// assert!(dict.get(1).is_none());
/// ```
pub fn shortest_path_dictionary(support: &SupportSet) -> Dictionary {
    let mut statistics = BuildStatistics::new();
    let mut discovered: [Option<Discovery>; NBYTES] = [None; NBYTES];
    let mut visited = [false; NBYTES];
    let mut queue = VecDeque::with_capacity(NBYTES);

    visited[0] = true;
    queue.push_back(0u8);

    while let Some(x) = queue.pop_front() {
        statistics.increment(Counters::StatesVisited);
        for &c in support.sorted() {
            statistics.increment(Counters::EdgesExamined);
            let y = x ^ c;
            if !visited[y as usize] {
                visited[y as usize] = true;
                discovered[y as usize] = Some(Discovery { parent: x, edge: c });
                queue.push_back(y);
            }
        }
    }

    let mut entries = vec![None; NBYTES];
    for target in 0..NBYTES {
        if !visited[target] {
            continue;
        }
        let mut path = Vec::new();
        let mut cur = target as u8;
        while let Some(Discovery { parent, edge }) = discovered[cur as usize] {
            path.push(edge);
            cur = parent;
        }
        path.reverse();
        entries[target] = Some(Codeword::new(path));
        statistics.increment(Counters::CodewordsEmitted);
    }

    let dictionary = Dictionary::from_entries(DictionaryKind::ShortestPath, entries, statistics);
    debug!(
        support = support.len(),
        reachable = dictionary.len(),
        max_len = dictionary.max_len(),
        stats = %dictionary.statistics(),
        "built shortest-path dictionary"
    );
    dictionary
}

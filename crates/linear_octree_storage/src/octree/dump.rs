use super::{NodeMap, Octree};

use itertools::Itertools;
use linear_octree_core::prelude::*;
use std::fmt;

/// Renders every stored record, one line per code in ascending numeric order:
///
/// ```text
///  1 (D0): SC: [5 ], OC: [0 7 ]
///  8 (D1): SC: [7 ], OC: []
/// 15 (D1): SC: [0 ], OC: []
/// ```
///
/// "SC" lists the filled children and "OC" the open children, by octant index. Codes are right-aligned to the width of the
/// largest one. This is meant for debugging and golden tests, not persistence.
pub struct NodeMapDump<'a, W: CodeWord>(pub &'a NodeMap<W>);

impl<'a, W: CodeWord> fmt::Display for NodeMapDump<'a, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records: Vec<_> = self
            .0
            .iter()
            .map(|(&code, &record)| (code, record))
            .sorted_by_key(|&(code, _)| code)
            .collect();
        let code_padding = records
            .last()
            .map_or(0, |(code, _)| code.to_string().len());

        for (code, record) in records {
            write!(f, "{:>width$} (D{}): SC: [", code, code.depth(), width = code_padding)?;
            for child in record.filled().iter_set() {
                write!(f, "{} ", child)?;
            }
            write!(f, "], OC: [")?;
            for child in record.open().iter_set() {
                write!(f, "{} ", child)?;
            }
            writeln!(f, "]")?;
        }

        Ok(())
    }
}

impl<W: CodeWord> Octree<W> {
    pub fn dump(&self) -> NodeMapDump<'_, W> {
        NodeMapDump(self.node_map())
    }
}

impl<W: CodeWord> fmt::Display for Octree<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Octree with volume {}:", self.volume())?;

        fmt::Display::fmt(&self.dump(), f)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

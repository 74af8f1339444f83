//! # Reports
//!
//! Tab-separated output of traversal results. Unreached distances are written as `inf`, missing
//! predecessors and labels as `-`.

use std::{
    fs::File,
    io::{BufWriter, Error, ErrorKind, Result, Write},
    path::Path,
};

use super::*;

/// Writer for traversal results
#[derive(Debug, Clone)]
pub struct ReportWriter {
    /// Append the node label as last column
    with_labels: bool,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self { with_labels: true }
    }
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether labels are written
    pub fn with_labels(mut self, with_labels: bool) -> Self {
        self.with_labels = with_labels;
        self
    }

    /// Writes one line `<node> <distance> <predecessor> [<label>]` per node, taken from `state`.
    /// `state` must hold the result of a breadth-first search on `graph`, e.g. the one filled by
    /// [`bfs_with_state`](crate::algo::bfs_with_state) or the embedded state right after
    /// [`Traversal::bfs`](crate::algo::Traversal::bfs).
    ///
    /// # Errors
    /// Fails with [`ErrorKind::InvalidInput`] if `state` was sized for a different graph.
    pub fn try_write_bfs<G, W>(
        &self,
        graph: &G,
        state: &TraversalState,
        mut writer: W,
    ) -> Result<()>
    where
        G: GraphLabels,
        W: Write,
    {
        if state.len() != graph.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "traversal state covers {} nodes, graph has {}",
                    state.len(),
                    graph.len()
                ),
            ));
        }

        for u in graph.vertices() {
            let distance = state
                .distance_of(u)
                .map_or_else(|| "inf".to_string(), |d| d.to_string());
            let predecessor = state
                .predecessor_of(u)
                .map_or_else(|| "-".to_string(), |p| p.to_string());

            write!(writer, "{u}\t{distance}\t{predecessor}")?;
            self.write_label(graph, u, &mut writer)?;
        }

        writer.flush()
    }

    /// Writes one line `<node> [<label>]` per entry of `order`
    pub fn try_write_order<G, W>(&self, graph: &G, order: &[Node], mut writer: W) -> Result<()>
    where
        G: GraphLabels,
        W: Write,
    {
        for &u in order {
            write!(writer, "{u}")?;
            self.write_label(graph, u, &mut writer)?;
        }

        writer.flush()
    }

    /// Writes the breadth-first report to a file
    pub fn try_write_bfs_file<G, P>(
        &self,
        graph: &G,
        state: &TraversalState,
        path: P,
    ) -> Result<()>
    where
        G: GraphLabels,
        P: AsRef<Path>,
    {
        self.try_write_bfs(graph, state, BufWriter::new(File::create(path)?))
    }

    fn write_label<G, W>(&self, graph: &G, u: Node, writer: &mut W) -> Result<()>
    where
        G: GraphLabels,
        W: Write,
    {
        if self.with_labels {
            writeln!(writer, "\t{}", graph.label(u).unwrap_or("-"))
        } else {
            writeln!(writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{Traversal, bfs_with_state};

    #[test]
    fn bfs_report() {
        let mut graph = load(b"3 1\n0 1 \"hub\"\n").unwrap();
        graph.bfs(0).unwrap();

        let mut out = Vec::new();
        ReportWriter::new()
            .try_write_bfs(&graph, graph.traversal_state(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\t0\t-\thub\n1\t1\t0\t-\n2\tinf\t-\t-\n"
        );
    }

    #[test]
    fn bfs_report_survives_later_runs() {
        let mut graph = load(b"3 2\n0 1\n1 2\n").unwrap();
        let mut state = TraversalState::for_graph(&graph);
        bfs_with_state(&graph, 0, &mut state).unwrap();

        // overwrites the embedded state with a run that records no distances
        graph.topological_order();

        let mut out = Vec::new();
        ReportWriter::new()
            .with_labels(false)
            .try_write_bfs(&graph, &state, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\t0\t-\n1\t1\t0\n2\t2\t1\n");
    }

    #[test]
    fn bfs_report_rejects_foreign_state() {
        let graph = load(b"3 0\n").unwrap();
        let state = TraversalState::new(5);

        let err = ReportWriter::new()
            .try_write_bfs(&graph, &state, Vec::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn order_report_without_labels() {
        let mut graph = load(b"3 2\n0 1\n1 2\n").unwrap();
        let order = graph.topological_order();

        let mut out = Vec::new();
        ReportWriter::new()
            .with_labels(false)
            .try_write_order(&graph, &order, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
    }
}

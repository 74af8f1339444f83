//! # Name Files
//!
//! A name file overwrites the labels of an already loaded graph. Each line has the shape
//! `<node_id> <label>` where the label is either a quoted string or the (trimmed) rest of the
//! line. Lines with an id outside `0..node_count` or without label are skipped.

use std::path::Path;

use tracing::{debug, trace};

use super::{decoder::TokenCursor, *};

/// Reader that applies name files to graphs via [`GraphLabels::set_label`]
#[derive(Debug, Clone, Default)]
pub struct NameReader;

impl NameReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }

    /// Applies all `<node_id> <label>` lines of `buf` to `graph` and returns the number of labels
    /// that were set
    pub fn apply<G: GraphLabels>(&self, graph: &mut G, buf: &[u8]) -> NumNodes {
        let mut cursor = TokenCursor::new(buf);
        cursor.skip_whitespace();

        let mut applied = 0;
        let mut skipped = 0;
        while !cursor.is_at_end() {
            let id = cursor.integer().value;
            if cursor.advance() || cursor.is_at_end() {
                skipped += 1;
                continue;
            }

            let label = match cursor.quoted_string() {
                Some(label) => {
                    cursor.skip_line();
                    label
                }
                None => String::from_utf8_lossy(cursor.rest_of_line().trim_ascii()).into_owned(),
            };

            match Node::try_from(id).ok().filter(|&u| graph.has_vertex(u)) {
                Some(u) => {
                    trace!(node = u, label = %label, "name");
                    graph.set_label(u, label);
                    applied += 1;
                }
                None => skipped += 1,
            }
        }

        debug!(applied, skipped, "name file applied");
        applied
    }

    /// Memory-maps the file at `path` and applies it to `graph`.
    /// An empty file applies no labels.
    ///
    /// # Errors
    /// Fails with [`LoadError::EmptyOrUnreadable`] if the file cannot be opened or mapped.
    pub fn apply_file<G, P>(&self, graph: &mut G, path: P) -> Result<NumNodes, LoadError>
    where
        G: GraphLabels,
        P: AsRef<Path>,
    {
        Ok(match map_file(path.as_ref())? {
            Some(data) => self.apply(graph, &data),
            None => 0,
        })
    }
}

/// Applies a name file buffer to `graph` with the default [`NameReader`]
pub fn apply_names<G: GraphLabels>(graph: &mut G, buf: &[u8]) -> NumNodes {
    NameReader::new().apply(graph, buf)
}

/// Applies the name file at `path` to `graph` with the default [`NameReader`]
pub fn apply_names_file<G, P>(graph: &mut G, path: P) -> Result<NumNodes, LoadError>
where
    G: GraphLabels,
    P: AsRef<Path>,
{
    NameReader::new().apply_file(graph, path)
}

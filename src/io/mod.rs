/*!
# IO

Reading graphs and auxiliary name files, and writing traversal results.

## Input Formats

- **Graph file** ([`GraphLoader`]): a header `<node_count> <edge_count>` followed by one
  `<src> <dst> ["label"]` record per line.
- **Name file** ([`NameReader`]): one `<node_id> <label>` line per node, overwriting labels of an
  already loaded graph.

Both readers work on plain byte buffers ([`decoder`] holds the tokenizer); the `*_file`
variants memory-map the file and hand the mapping to the buffer reader.

## Output

[`ReportWriter`] prints breadth-first distances and node orders as tab-separated lines.
*/

pub mod decoder;
pub mod loader;
pub mod names;
pub mod report;

use std::{fs::File, path::Path};

use memmap2::Mmap;

use crate::prelude::*;

pub use loader::*;
pub use names::*;
pub use report::*;

/// Maps the file at `path` read-only into memory.
/// Returns `Ok(None)` for an empty file, which cannot be mapped on all platforms.
fn map_file(path: &Path) -> Result<Option<Mmap>, LoadError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }

    // SAFETY: the mapping is private to this process and read-only; it is dropped before
    // the function that requested it returns.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Some(mmap))
}

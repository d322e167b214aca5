/*!
# IO

Utilities for reading and writing graphs from and to textual formats.

## Formats

- **EdgeList**: one edge `source target` per line, a single token for an isolated vertex.
  Supported for reading and writing. Vertices are parsed with `FromStr` and printed with
  `Display`, so their textual form must not contain whitespace.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).
  Write-only. Vertex names are quoted, so any `Display` output works.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by writers for a specific format.
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{error::Result, prelude::*};

pub use dot::*;
pub use edge_list::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz
    Dot,
    /// Edge list format
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(FileFormat::Dot),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: EdgeListWrite + DotWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_format_from_str() {
        assert_eq!("DOT".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!(
            "edgelist".parse::<FileFormat>().unwrap(),
            FileFormat::EdgeList
        );
        assert!(matches!(
            "metis".parse::<FileFormat>(),
            Err(GraphError::UnknownFormat(name)) if name == "metis"
        ));
    }

    #[test]
    fn write_by_format() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges([(1, 2)]);

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::EdgeList)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 2\n");

        let mut buffer = Vec::new();
        graph.try_write_to_writer(&mut buffer, FileFormat::Dot).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("digraph {"));
    }
}

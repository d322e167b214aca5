//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines that are either
//! - `u v`: a directed edge from `u` to `v`, or
//! - `u`: a vertex, which is how isolated vertices are preserved.
//!
//! Empty lines and lines starting with the comment identifier (`#` by default) are skipped.
//! Repeated edges are dropped just like [`GraphEdgeEditing::add_edge`] drops parallel edges.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::*;
use crate::error::parse_error;

/// A reader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads a graph from `reader`.
    ///
    /// # Errors
    /// Returns [`GraphError::Parse`] for lines with more than two tokens or unparsable vertices,
    /// and [`GraphError::Io`] if reading fails.
    pub fn try_read_graph<G, R>(&self, reader: R) -> Result<G>
    where
        G: GraphEdgeEditing,
        G::Vertex: FromStr,
        (G::Vertex, G::Vertex): Into<G::Edge>,
        R: BufRead,
    {
        let mut graph = G::new();
        let mut dropped = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || is_comment(line, &self.comment_identifier) {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [u] => {
                    graph.add_vertex(parse_vertex(u, i + 1)?);
                }
                [u, v] => {
                    let edge = (parse_vertex(u, i + 1)?, parse_vertex(v, i + 1)?);
                    if !graph.add_edge(edge.into()) {
                        dropped += 1;
                    }
                }
                _ => {
                    return Err(parse_error!(
                        i + 1,
                        "expected one or two tokens, found {}",
                        tokens.len()
                    ));
                }
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped repeated edges while reading edge list");
        }
        Ok(graph)
    }
}

fn parse_vertex<V: FromStr>(token: &str, line: usize) -> Result<V> {
    token
        .parse()
        .map_err(|_| parse_error!(line, "cannot parse vertex `{token}`"))
}

/// Trait for creating graphs from the EdgeList-Format.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
    G::Vertex: FromStr,
    (G::Vertex, G::Vertex): Into<G::Edge>,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Vertices whose name starts with `comment_identifier` are rejected
    comment_identifier: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. Should match the one of the reader.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListWriter {
        self.comment_identifier = c.into();
        self
    }

    /// Formats `u` and checks that the reader would parse it back as a single token
    fn vertex_name<V: Display>(&self, u: &V) -> Result<String> {
        let name = u.to_string();
        let reason = if name.is_empty() {
            "empty name"
        } else if name.contains(char::is_whitespace) {
            "name contains whitespace"
        } else if is_comment(&name, &self.comment_identifier) {
            "name starts with the comment identifier"
        } else {
            return Ok(name);
        };
        Err(GraphError::UnwritableVertex {
            vertex: name,
            reason,
        })
    }
}

/// Returns *true* if `line` starts with a non-empty `comment_identifier`
fn is_comment(line: &str, comment_identifier: &str) -> bool {
    !comment_identifier.is_empty() && line.starts_with(comment_identifier)
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyTest,
    G::Vertex: Display,
{
    /// Writes all edges in insertion order, followed by all vertices without incident edges.
    ///
    /// Every vertex name is checked before anything is written, so a rejected graph leaves
    /// `writer` untouched.
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let names = graph
            .vertices()
            .map(|u| Ok((u, self.vertex_name(u)?)))
            .collect::<Result<FxHashMap<_, _>>>()?;

        let mut endpoints = FxHashSet::default();
        for e in graph.edges() {
            writeln!(writer, "{} {}", names[e.source()], names[e.target()])?;
            endpoints.insert(e.source());
            endpoints.insert(e.target());
        }

        for u in graph.vertices() {
            if !endpoints.contains(u) {
                writeln!(writer, "{}", names[u])?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G> EdgeListWrite for G
where
    G: AdjacencyTest,
    G::Vertex: Display,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

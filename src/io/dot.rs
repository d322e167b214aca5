//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) vertices and
//! (labelled) edges.
//!
//! For example, drawing a graph where the out-neighbors of `1` are colored red can be
//! achieved via
//! ```
//! use adjgraph::{prelude::*, io::*};
//!
//! let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3)]);
//!
//! let mut writer = Vec::new();
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer).unwrap();
//! dot_writer.write_edges(&mut writer, graph.edges(), None).unwrap();
//! dot_writer.color_vertices(&mut writer, graph.out_neighbors_of(&1), DotColor::Red).unwrap();
//! dot_writer.finish_graph(&mut writer).unwrap();
//!
//! let dot = String::from_utf8(writer).unwrap();
//! assert!(dot.contains("\"2\"[style=filled, color=red]"));
//! ```
//!
//! Vertices are written as quoted IDs, so any `Display` output is a valid name.
//! Note that for vertices, the latest coloring is the one that will be applied in a visualizer,
//! whereas for edges, each new colored edge adds another edge to the graph.

use std::fmt::Display;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Prefix of a vertex name (empty by default)
    prefix: String,
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a vertex name. Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn vertex_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the (directed) graph.
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")?;
        Ok(())
    }

    /// Formats a vertex as quoted ID depending on `self.prefix`
    fn format_vertex<V: Display>(&self, u: &V) -> String {
        quote(&format!("{}{u}", self.prefix))
    }

    /// Writes a list of vertices to `writer`, so that isolated vertices show up as well.
    pub fn write_vertices<'a, W, V, I>(&self, writer: &mut W, vertices: I) -> Result<()>
    where
        W: Write,
        V: Display + 'a,
        I: IntoIterator<Item = &'a V>,
    {
        for u in vertices {
            write!(writer, "{};", self.format_vertex(u))?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Writes an iterator of edges to `writer`, optionally colored.
    pub fn write_edges<'a, W, V, E, I>(
        &self,
        writer: &mut W,
        edges: I,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        V: Display + 'a,
        E: GraphEdge<V> + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let edge_color = color
            .map(|c| format!("[color={c}]"))
            .unwrap_or_default();

        for e in edges {
            write!(
                writer,
                "{}->{}{edge_color};",
                self.format_vertex(e.source()),
                self.format_vertex(e.target())
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Writes an iterator of edges to `writer`, labelling each edge with `label(edge)`.
    pub fn write_labeled_edges<'a, W, V, E, I, F, L>(
        &self,
        writer: &mut W,
        edges: I,
        mut label: F,
    ) -> Result<()>
    where
        W: Write,
        V: Display + 'a,
        E: GraphEdge<V> + 'a,
        I: IntoIterator<Item = &'a E>,
        F: FnMut(&E) -> L,
        L: Display,
    {
        for e in edges {
            write!(
                writer,
                "{}->{}[label={}];",
                self.format_vertex(e.source()),
                self.format_vertex(e.target()),
                quote(&label(e).to_string())
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Writes a list of colored vertices to `writer`.
    /// This method should only be needed when wanting to color additional vertices which is why
    /// `color` is not optional.
    pub fn color_vertices<'a, W, V, I>(&self, writer: &mut W, vertices: I, color: DotColor) -> Result<()>
    where
        W: Write,
        V: Display + 'a,
        I: IntoIterator<Item = &'a V>,
    {
        for u in vertices {
            write!(
                writer,
                "{}[style=filled, color={color}];",
                self.format_vertex(u)
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Wraps `s` in double quotes, escaping quotes and backslashes
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_vertices(&mut writer, graph.vertices())?;
        self.write_edges(&mut writer, graph.edges(), None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Commonly used Svg-Dot colors, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Cyan,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    Magenta,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_simple_graph() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges([(1, 2)]);
        graph.remove_vertex(&1);
        graph.add_edge(Edge::new(2, 3));
        graph.remove_vertex(&3);

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph {\n\"2\";\n\n}\n"
        );
    }

    #[test]
    fn colored_and_labeled_edges() {
        let graph: AdjacencyGraph<&str, TaggedEdge<&str, u32>> =
            AdjacencyGraph::from_edges([TaggedEdge::new("a", "b", 7)]);

        let mut buffer = Vec::new();
        let writer = DotWriter::new().vertex_prefix("n_");
        writer
            .write_edges(&mut buffer, graph.edges(), Some(DotColor::DarkGreen))
            .unwrap();
        writer
            .write_labeled_edges(&mut buffer, graph.edges(), |e| e.tag)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\"n_a\"->\"n_b\"[color=darkgreen];\n\"n_a\"->\"n_b\"[label=\"7\"];\n"
        );
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}

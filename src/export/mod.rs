//! Exporters built on the public read interface.
//!
//! Both exporters walk a graph and its nested scopes through [`Ir`](crate::Ir)
//! handles only; neither needs access to arena internals.
//!
//! - [`dot`] renders a Graphviz digraph, one cluster per nested scope
//! - [`relations`] flattens vertices and edges into two correlated fact tables
//!
//! Presentation and file naming are controlled by [`ExportConfig`].

pub mod dot;
pub mod relations;

use crate::ir::{EdgeCategory, VertexCategory};

/// Configuration shared by the exporters.
///
/// The defaults reproduce the conventional IR rendering: diamonds for control
/// vertices, rectangles for data vertices, and dashed association edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Name of the emitted DOT digraph (default: `IR`).
    pub graph_name: String,

    /// Optional title shown above the diagram.
    pub title: Option<String>,

    /// Node shape for `Control` vertices (default: `diamond`).
    pub control_shape: String,

    /// Node shape for `Data` vertices (default: `rectangle`).
    pub data_shape: String,

    /// Node shape for `Compound` vertices (default: `Mdiamond`).
    pub compound_shape: String,

    /// Arrowhead for `Control` edges (default: `normal`).
    pub control_arrowhead: String,

    /// Arrowhead for `Data` edges (default: `onormal`).
    pub data_arrowhead: String,

    /// Arrowhead for `Association` edges (default: `vee`).
    pub association_arrowhead: String,

    /// Render nested scopes as `cluster_N` subgraphs (default: true).
    pub clusters: bool,

    /// File name used by [`dot::write_dot`] (default: `graph.dot`).
    pub dot_file: String,

    /// File name of the vertex relation (default: `vertices.facts`).
    pub vertices_file: String,

    /// File name of the edge relation (default: `edges.facts`).
    pub edges_file: String,

    /// Field delimiter of the fact files (default: `,`).
    pub delimiter: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            graph_name: "IR".to_string(),
            title: None,
            control_shape: "diamond".to_string(),
            data_shape: "rectangle".to_string(),
            compound_shape: "Mdiamond".to_string(),
            control_arrowhead: "normal".to_string(),
            data_arrowhead: "onormal".to_string(),
            association_arrowhead: "vee".to_string(),
            clusters: true,
            dot_file: "graph.dot".to_string(),
            vertices_file: "vertices.facts".to_string(),
            edges_file: "edges.facts".to_string(),
            delimiter: b',',
        }
    }
}

impl ExportConfig {
    /// Returns the node shape for a vertex category.
    #[must_use]
    pub fn shape(&self, category: VertexCategory) -> &str {
        match category {
            VertexCategory::Control => &self.control_shape,
            VertexCategory::Data => &self.data_shape,
            VertexCategory::Compound => &self.compound_shape,
        }
    }

    /// Returns the arrowhead for an edge category.
    #[must_use]
    pub fn arrowhead(&self, category: EdgeCategory) -> &str {
        match category {
            EdgeCategory::Control => &self.control_arrowhead,
            EdgeCategory::Data => &self.data_arrowhead,
            EdgeCategory::Association => &self.association_arrowhead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presentation() {
        let config = ExportConfig::default();
        assert_eq!(config.shape(VertexCategory::Control), "diamond");
        assert_eq!(config.shape(VertexCategory::Data), "rectangle");
        assert_eq!(config.shape(VertexCategory::Compound), "Mdiamond");
        assert_eq!(config.arrowhead(EdgeCategory::Data), "onormal");
        assert_eq!(config.arrowhead(EdgeCategory::Association), "vee");
        assert_eq!(config.delimiter, b',');
    }
}

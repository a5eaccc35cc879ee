use crate::graphs::graph::FeatureGraph;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> ExportError + '_ {
    move |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes the node feature matrix as CSV: a `node` id column followed by one
/// column per feature dimension.
pub fn write_node_features(graph: &FeatureGraph, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error(path))?;

    let width = graph.node_features().ncols();
    let mut header = vec!["node".to_string()];
    header.extend((0..width).map(|i| format!("f{i}")));
    writer.write_record(&header).map_err(csv_error(path))?;

    for (node, row) in graph.node_features().rows().into_iter().enumerate() {
        let mut record = vec![node.to_string()];
        record.extend(row.iter().map(|value| value.to_string()));
        writer.write_record(&record).map_err(csv_error(path))?;
    }
    writer.flush().map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source: source.into(),
    })
}

/// Writes the directed edge list and edge feature matrix as CSV:
/// `src`, `dst`, then one column per feature dimension.
pub fn write_edges(graph: &FeatureGraph, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error(path))?;

    let width = graph.edge_features().ncols();
    let mut header = vec!["src".to_string(), "dst".to_string()];
    header.extend((0..width).map(|i| format!("f{i}")));
    writer.write_record(&header).map_err(csv_error(path))?;

    for (edge, (src, dst)) in graph.edges().enumerate() {
        let mut record = vec![src.to_string(), dst.to_string()];
        record.extend(
            graph
                .edge_features()
                .row(edge)
                .iter()
                .map(|value| value.to_string()),
        );
        writer.write_record(&record).map_err(csv_error(path))?;
    }
    writer.flush().map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source: source.into(),
    })
}

/// Writes `<prefix>_nodes.csv` and `<prefix>_edges.csv` into a directory.
pub fn write_graph(graph: &FeatureGraph, directory: &Path, prefix: &str) -> Result<(), ExportError> {
    write_node_features(graph, &directory.join(format!("{prefix}_nodes.csv")))?;
    write_edges(graph, &directory.join(format!("{prefix}_edges.csv")))
}

//! Filesystem glue: a manifest file plus its CSV blueprints become a
//! `Level` and its entity kinds.

use std::fs;
use std::path::Path;

use crate::assets::manifest::LevelManifest;
use crate::assets::registry::EntityRegistry;
use crate::core::level::{Level, LevelError};

/// Parse a CSV blueprint into a grid of atlas indices.
///
/// Blank lines are skipped and cells are trimmed, so hand-edited files
/// with stray spaces or a trailing newline parse cleanly. Error
/// positions refer to the source file (blank lines included).
pub fn parse_blueprint(csv: &str) -> Result<Vec<Vec<i32>>, LevelError> {
    let mut rows = Vec::new();
    for (row_idx, line) in csv.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col_idx, cell) in line.split(',').enumerate() {
            let cell = cell.trim();
            let value = cell.parse::<i32>().map_err(|_| LevelError::BadCell {
                row: row_idx,
                col: col_idx,
                value: cell.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Load a level and its entity registry from a manifest file, reading
/// each layer's CSV blueprint relative to the manifest's directory.
pub fn load_level(manifest_path: &Path) -> Result<(Level, EntityRegistry), LevelError> {
    let text = fs::read_to_string(manifest_path)?;
    let manifest = LevelManifest::from_json(&text)?;
    let dir = manifest_path.parent().unwrap_or(Path::new(""));

    let mut blueprints = Vec::with_capacity(manifest.layers.len());
    for layer in &manifest.layers {
        let csv = fs::read_to_string(dir.join(&layer.mapping))?;
        blueprints.push(parse_blueprint(&csv)?);
    }
    let level = Level::build(&manifest, &blueprints)?;
    let registry = EntityRegistry::from_manifest(&manifest)?;
    Ok((level, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grids_with_gaps_and_spaces() {
        let csv = "0, 1,-1\n\n2,3, 4\n";
        let grid = parse_blueprint(csv).unwrap();
        assert_eq!(grid, vec![vec![0, 1, -1], vec![2, 3, 4]]);
    }

    #[test]
    fn windows_line_endings_parse() {
        let csv = "0,1\r\n2,3\r\n";
        let grid = parse_blueprint(csv).unwrap();
        assert_eq!(grid, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn bad_cells_point_at_the_source_line() {
        let csv = "0,1\n\nx,2\n";
        let err = parse_blueprint(csv).unwrap_err();
        match err {
            LevelError::BadCell { row, col, value } => {
                assert_eq!(row, 2);
                assert_eq!(col, 0);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_is_an_empty_grid() {
        assert!(parse_blueprint("").unwrap().is_empty());
    }
}

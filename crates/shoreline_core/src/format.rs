//! The editor's bracketed `.map` text format
//!
//! ```text
//! #Map tiles: Dimensions followed by tile separated by [ ].
//! 3 2
//! [00000][00004][00000]
//! [00000][00007][00000]
//! #Objects: on format [x][y][type][id][health][z-index][damage]
//! [1][1][tree][3][100][1][0]
//! ```
//!
//! Only the tile section is interpreted. Object records belong to the object
//! layer and are carried through verbatim so a load/save cycle preserves them.

use crate::grid::{Grid, GridError};
use crate::tile::TileCategory;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// Comment line written before the tile section
pub const MAP_TILES_HEADER: &str = "#Map tiles: Dimensions followed by tile separated by [ ].";
/// Comment line written before the object section
pub const MAP_OBJECTS_HEADER: &str =
    "#Objects: on format [x][y][type][id][health][z-index][damage]";

/// Errors that can occur when reading a map file
#[derive(Debug, Error)]
pub enum MapFormatError {
    #[error("map file is empty or missing the dimensions line")]
    MissingHeader,
    #[error("invalid dimensions line: {0:?}")]
    InvalidHeader(String),
    #[error("missing tile row {0}")]
    MissingRow(usize),
    #[error("row {row} has {found} tiles, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },
    #[error("row {row}: invalid tile token {token:?}")]
    InvalidToken { row: usize, token: String },
    #[error("row {row}, column {column}: unknown tile code {code}")]
    UnknownTileCode { row: usize, column: usize, code: u16 },
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed map file: the tile grid plus opaque object records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDocument {
    pub grid: Grid,
    /// Object lines as they appeared in the file, comments stripped
    pub objects: Vec<String>,
}

impl MapDocument {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            objects: Vec::new(),
        }
    }
}

/// Extract the contents of every `[...]` group on a line.
///
/// Text outside brackets is ignored, as is an unterminated trailing `[`.
fn bracket_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else { break };
        tokens.push(&after[..close]);
        rest = &after[close + 1..];
    }
    tokens
}

fn parse_dimensions(line: &str) -> Result<(u32, u32), MapFormatError> {
    let invalid = || MapFormatError::InvalidHeader(line.to_string());
    let mut parts = line.split_whitespace();
    let width = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let height = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((width, height))
}

fn parse_row(line: &str, row: usize, width: usize) -> Result<Vec<TileCategory>, MapFormatError> {
    let tokens = bracket_tokens(line);
    if tokens.len() != width {
        return Err(MapFormatError::RowWidth {
            row,
            expected: width,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(column, token)| {
            let code: u16 = token
                .trim()
                .parse()
                .map_err(|_| MapFormatError::InvalidToken {
                    row,
                    token: token.to_string(),
                })?;
            TileCategory::from_code(code)
                .map_err(|_| MapFormatError::UnknownTileCode { row, column, code })
        })
        .collect()
}

/// Parse the full text of a map file
pub fn parse_map(text: &str) -> Result<MapDocument, MapFormatError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().ok_or(MapFormatError::MissingHeader)?;
    let (width, height) = parse_dimensions(header)?;

    // A zero-width map has no row lines to read. Rows are collected as they
    // are parsed; the header alone never sizes an allocation.
    let grid = if width == 0 || height == 0 {
        Grid::new(width, height)
    } else {
        let mut rows = Vec::new();
        for row in 0..height as usize {
            let line = lines.next().ok_or(MapFormatError::MissingRow(row))?;
            rows.push(parse_row(line, row, width as usize)?);
        }
        Grid::from_rows(rows)?
    };
    let objects = lines.map(str::to_string).collect();
    Ok(MapDocument { grid, objects })
}

/// Encode only the tile rows of a grid, one line per row
pub fn encode_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() as usize * 7 + 1) * grid.height() as usize);
    for row in grid.rows() {
        for tile in row {
            let _ = write!(out, "[{:05}]", tile.code());
        }
        out.push('\n');
    }
    out
}

/// Decode tile rows produced by [`encode_grid`] for a grid of known size
pub fn decode_grid(text: &str, width: u32, height: u32) -> Result<Grid, MapFormatError> {
    parse_map(&format!("{width} {height}\n{text}")).map(|doc| doc.grid)
}

/// Render a map document in the file format
pub fn write_map(doc: &MapDocument) -> String {
    let mut out = String::new();
    out.push_str(MAP_TILES_HEADER);
    out.push('\n');
    let _ = writeln!(out, "{} {}", doc.grid.width(), doc.grid.height());
    out.push_str(&encode_grid(&doc.grid));
    out.push_str(MAP_OBJECTS_HEADER);
    out.push('\n');
    for object in &doc.objects {
        out.push_str(object);
        out.push('\n');
    }
    out
}

/// Load a map file from disk
pub fn load_map(path: &Path) -> Result<MapDocument, MapFormatError> {
    let content = std::fs::read_to_string(path)?;
    parse_map(&content)
}

/// Save a map file to disk
pub fn save_map(path: &Path, doc: &MapDocument) -> Result<(), MapFormatError> {
    std::fs::write(path, write_map(doc))?;
    Ok(())
}

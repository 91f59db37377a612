//! Fixed-width text layouts for maps and the region map.
//!
//! One string per row, one character per cell. Every row must have the
//! same number of characters as the first; nothing is padded or
//! truncated.

use crate::content::Content;
use rck_core::BuildError;
use rck_space::Grid;

/// Parse rows through a glyph table into a grid and row-major cells.
pub fn parse_glyphs<S, T, F>(rows: &[S], lookup: F) -> Result<(Grid, Vec<T>), BuildError>
where
    S: AsRef<str>,
    F: Fn(char) -> Option<T>,
{
    let first = rows.first().ok_or(BuildError::EmptyText)?;
    let width = first.as_ref().chars().count();
    if width == 0 {
        return Err(BuildError::EmptyText);
    }
    let mut cells = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            return Err(BuildError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (col, glyph) in line.chars().enumerate() {
            let value = lookup(glyph).ok_or(BuildError::UnknownGlyph { row, col, glyph })?;
            cells.push(value);
        }
    }
    let grid = Grid::new(dim(width, "width")?, dim(rows.len(), "height")?)?;
    Ok((grid, cells))
}

/// Parse map text into content tags.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<(Grid, Vec<Content>), BuildError> {
    parse_glyphs(rows, Content::from_glyph)
}

fn dim(value: usize, name: &'static str) -> Result<u32, BuildError> {
    u32::try_from(value).map_err(|_| BuildError::DimensionTooLarge {
        name,
        value: value as u64,
        max: Grid::MAX_DIM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_glyphs_row_major() {
        let (grid, cells) = parse_rows(&["#.T", "^>+"]).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(
            cells,
            vec![
                Content::Wall,
                Content::None,
                Content::Tree,
                Content::Rocks,
                Content::Stairs,
                Content::Door,
            ]
        );
    }

    #[test]
    fn space_reads_as_open_ground() {
        let (_, cells) = parse_rows(&[" ="]).unwrap();
        assert_eq!(cells, vec![Content::None, Content::Zone]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_rows(&["...", "..", "..."]).unwrap_err();
        assert_eq!(
            err,
            BuildError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_glyph_reports_position() {
        let err = parse_rows(&["..", ".x"]).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownGlyph {
                row: 1,
                col: 1,
                glyph: 'x'
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(parse_rows(&none).unwrap_err(), BuildError::EmptyText);
        assert_eq!(parse_rows(&[""]).unwrap_err(), BuildError::EmptyText);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_dimension_reports_real_length() {
        let len = u32::MAX as usize + 5;
        let err = dim(len, "width").unwrap_err();
        assert_eq!(
            err,
            BuildError::DimensionTooLarge {
                name: "width",
                value: 4_294_967_300,
                max: Grid::MAX_DIM,
            }
        );
        assert!(err.to_string().starts_with("width = 4294967300 exceeds"));
    }
}

use std::path::Path;

use crate::io::{LoadError, ParseError};
use crate::math::Real;
use crate::shape::HeightField;

/// Parses a text grid of whitespace-separated integers.
///
/// Each non-blank line is a row; blank (or whitespace-only) lines are skipped. Every
/// row must have as many columns as the first one.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use relief3d::io::parse_text_grid;
///
/// let field = parse_text_grid("0 0\n\n0 10\n").unwrap();
/// assert_eq!(field.width(), 2);
/// assert_eq!(field.height(), 2);
/// assert_eq!(field.get(1, 1), 10.0);
/// # }
/// ```
pub fn parse_text_grid(src: &str) -> Result<HeightField, ParseError> {
    let mut width = None;
    let mut height = 0;
    let mut samples = Vec::new();

    for (line_id, line) in src.lines().enumerate() {
        let line_number = line_id + 1;
        let row_start = samples.len();

        for token in line.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidToken {
                    line: line_number,
                    token: token.to_string(),
                })?;
            samples.push(value as Real);
        }

        let found = samples.len() - row_start;

        if found == 0 {
            continue;
        }

        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::RaggedRow {
                    line: line_number,
                    expected,
                    found,
                })
            }
            Some(_) => {}
        }

        height += 1;
    }

    let width = width.ok_or(ParseError::Empty)?;
    Ok(HeightField::from_row_major(width, height, &samples))
}

/// Reads and parses the text grid at `path`.
pub fn load_text_grid(path: &Path) -> Result<HeightField, LoadError> {
    let src = std::fs::read_to_string(path)?;
    Ok(parse_text_grid(&src)?)
}

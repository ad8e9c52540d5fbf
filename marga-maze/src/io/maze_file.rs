//! Text maze format.
//!
//! ```text
//! #####      line 0: north boundary (horizontal-wall line)
//! #...#      line 1: vertical-wall line for row height-1
//! #.###      line 2: horizontal walls between rows
//! #...#
//! #####
//! ```
//!
//! A maze of `W×H` cells is `2H+1` lines of `2W+1` characters. Even lines
//! carry horizontal walls at odd columns, odd lines carry vertical walls at
//! even columns, and every even-line/even-column intersection is `#`.

use std::path::Path;

use thiserror::Error;

use crate::core::GridCoord;
use crate::topology::MazeTopology;

/// Errors when reading a maze file.
#[derive(Debug, Error)]
pub enum MazeFileError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File has no lines
    #[error("maze file is empty")]
    Empty,

    /// Line count is not `2H+1` or line length not `2W+1`
    #[error("maze must have an odd number of lines and columns (got {lines} lines of {columns})")]
    EvenDimension {
        /// Number of lines
        lines: usize,
        /// Characters per line
        columns: usize,
    },

    /// A line differs in length from the first one
    #[error("line {line} has length {found}, expected {expected}")]
    InconsistentLength {
        /// 1-based line number
        line: usize,
        /// Length of the first line
        expected: usize,
        /// Length of this line
        found: usize,
    },

    /// Character other than `#` or `.`
    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
        /// Offending character
        found: char,
    },

    /// Outer boundary is not fully walled
    #[error("outer wall missing at line {line}, column {column}")]
    OpenBoundary {
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// Wall intersection that is not `#`
    #[error("wall intersection at line {line}, column {column} must be '#'")]
    BrokenIntersection {
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },
}

/// Load a maze from a file.
pub fn load_maze(path: &Path) -> Result<MazeTopology, MazeFileError> {
    let text = std::fs::read_to_string(path)?;
    parse_maze(&text)
}

/// Parse maze text into a topology.
///
/// Leading and trailing whitespace of every line is ignored, as are blank
/// lines after the last row.
pub fn parse_maze(text: &str) -> Result<MazeTopology, MazeFileError> {
    let mut trimmed: Vec<&str> = text.lines().map(str::trim).collect();
    while trimmed.last().is_some_and(|l| l.is_empty()) {
        trimmed.pop();
    }
    if trimmed.is_empty() {
        return Err(MazeFileError::Empty);
    }

    let columns = trimmed[0].len();
    for (i, line) in trimmed.iter().enumerate() {
        if let Some((j, found)) = line.chars().enumerate().find(|(_, c)| *c != '#' && *c != '.') {
            return Err(MazeFileError::InvalidCharacter {
                line: i + 1,
                column: j + 1,
                found,
            });
        }
        if line.len() != columns {
            return Err(MazeFileError::InconsistentLength {
                line: i + 1,
                expected: columns,
                found: line.len(),
            });
        }
    }
    let lines: Vec<&[u8]> = trimmed.iter().map(|l| l.as_bytes()).collect();

    if lines.len() % 2 == 0 || columns % 2 == 0 || lines.len() < 3 || columns < 3 {
        return Err(MazeFileError::EvenDimension {
            lines: lines.len(),
            columns,
        });
    }

    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        let open = if i == 0 || i == last {
            line.iter().position(|&c| c != b'#')
        } else if line[0] != b'#' {
            Some(0)
        } else if line[columns - 1] != b'#' {
            Some(columns - 1)
        } else {
            None
        };
        if let Some(j) = open {
            return Err(MazeFileError::OpenBoundary {
                line: i + 1,
                column: j + 1,
            });
        }
    }

    let height = lines.len() / 2;
    let width = columns / 2;
    let mut maze = MazeTopology::new(width, height);

    for (y, line) in lines.iter().enumerate() {
        if y % 2 == 0 {
            for (x, &c) in line.iter().enumerate() {
                if x % 2 == 0 && c != b'#' {
                    return Err(MazeFileError::BrokenIntersection {
                        line: y + 1,
                        column: x + 1,
                    });
                }
            }
            // Line 2k is the south side of row height - k
            let row = (height - y / 2) as i32;
            for x in 0..width {
                if line[2 * x + 1] == b'#' {
                    maze.add_horizontal_wall(x as i32, row);
                }
            }
        } else {
            let row = (height - y / 2 - 1) as i32;
            for x in 0..=width {
                if line[2 * x] == b'#' {
                    maze.add_vertical_wall(row, x as i32);
                }
            }
        }
    }

    Ok(maze)
}

/// Render a topology back into the text format.
pub fn to_maze_text(maze: &MazeTopology) -> String {
    let (width, height) = (maze.width(), maze.height());
    let vertical = maze.vertical_walls();
    let horizontal = maze.horizontal_walls();
    let mut out = String::with_capacity((2 * width + 2) * (2 * height + 1));

    for line in 0..=2 * height {
        if line % 2 == 0 {
            let row = (height - line / 2) as i32;
            for x in 0..width as i32 {
                out.push('#');
                let walled = horizontal.contains(&GridCoord::new(x, row));
                out.push(if walled { '#' } else { '.' });
            }
            out.push('#');
        } else {
            let row = (height - line / 2 - 1) as i32;
            for x in 0..=width as i32 {
                let walled = vertical.contains(&GridCoord::new(x, row));
                out.push(if walled { '#' } else { '.' });
                if x < width as i32 {
                    out.push('.');
                }
            }
        }
        out.push('\n');
    }
    out
}

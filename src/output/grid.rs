//! Grid layout for a built tree
//!
//! The renderer lays an `Entry` tree out on a fixed `rows x columns` grid of
//! text cells. Each entry gets one row with its label in the column equal to
//! its depth. Its parent's column holds a connector on that row and a rail on
//! every row of the entry's own subtree. Joining the cells of a row gives one
//! line of output.

use std::io::{self, Write};
use std::path::MAIN_SEPARATOR;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::Entry;
use crate::error::{Result, TreeError};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const RAIL: &str = "│   ";
pub const BLANK: &str = "    ";

/// Where a row's label sits, so it can be coloured on output.
#[derive(Debug, Clone, Copy, Default)]
struct LabelCell {
    column: usize,
    is_dir: bool,
}

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    labels: Vec<LabelCell>,
}

/// Lay out `root` on a grid with `root.descendants() + 1` rows and
/// `max_column + 1` columns. Fails if an entry is deeper than `max_column`.
pub fn render_tree(root: &Entry, max_column: usize, full_path: bool) -> Result<Grid> {
    let columns = max_column + 1;
    let deepest = root.deepest();
    if deepest >= columns {
        return Err(TreeError::GridTooNarrow {
            depth: deepest,
            columns,
        });
    }

    let rows = root.descendants() + 1;
    let mut grid = Grid {
        cells: vec![vec![String::new(); columns]; rows],
        labels: vec![LabelCell::default(); rows],
    };
    let used = grid.place(root, 0, full_path);
    debug_assert_eq!(used, rows);
    Ok(grid)
}

/// Label for an entry: its name (or full path), with a trailing separator for directories.
pub fn entry_label(entry: &Entry, full_path: bool) -> String {
    let mut label = if full_path {
        entry.path().to_string_lossy().to_string()
    } else {
        entry.name()
    };
    if entry.is_dir() && !label.ends_with(MAIN_SEPARATOR) {
        label.push(MAIN_SEPARATOR);
    }
    label
}

impl Grid {
    /// Place `entry` starting at `start_row` and return the number of rows used.
    fn place(&mut self, entry: &Entry, start_row: usize, full_path: bool) -> usize {
        let column = entry.depth();
        self.cells[start_row][column] = entry_label(entry, full_path);
        self.labels[start_row] = LabelCell {
            column,
            is_dir: entry.is_dir(),
        };

        let mut row = start_row + 1;
        let children = entry.children();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            let (connector, rail) = if is_last {
                (LAST_BRANCH, BLANK)
            } else {
                (BRANCH, RAIL)
            };

            self.cells[row][column] = connector.to_string();
            for below in row + 1..=row + child.descendants() {
                self.cells[below][column] = rail.to_string();
            }

            let used = self.place(child, row, full_path);
            debug_assert_eq!(used, 1 + child.descendants());
            row += 1 + child.descendants();
        }

        row - start_row
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.cells[row][column]
    }

    /// Each row's cells concatenated into one line.
    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.concat()).collect()
    }

    /// Write every row as a line, directory labels in bold blue.
    pub fn write_to<W: WriteColor + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (row, label) in self.cells.iter().zip(&self.labels) {
            for (column, cell) in row.iter().enumerate() {
                if label.is_dir && column == label.column {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    write!(out, "{}", cell)?;
                    out.reset()?;
                } else {
                    write!(out, "{}", cell)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::{Buffer, NoColor};

    use super::*;

    fn file(path: &str, depth: usize) -> Entry {
        Entry::file(PathBuf::from(path), depth)
    }

    fn dir(path: &str, depth: usize, children: Vec<Entry>) -> Entry {
        Entry::new(PathBuf::from(path), true, depth, children).unwrap()
    }

    fn sample() -> Entry {
        dir(
            "tmp2",
            0,
            vec![
                dir("tmp2/bin", 1, vec![file("tmp2/bin/sheet.pdf", 2)]),
                file("tmp2/data.txt", 1),
                file("tmp2/file.bin", 1),
                dir("tmp2/local", 1, Vec::new()),
            ],
        )
    }

    #[test]
    fn test_render_sample() {
        let grid = render_tree(&sample(), 2, false).unwrap();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.columns(), 3);
        assert_eq!(
            grid.lines(),
            [
                "tmp2/",
                "├── bin/",
                "│   └── sheet.pdf",
                "├── data.txt",
                "├── file.bin",
                "└── local/",
            ]
        );
    }

    #[test]
    fn test_render_full_path() {
        let grid = render_tree(&sample(), 2, true).unwrap();
        assert_eq!(grid.cell(0, 0), "tmp2/");
        assert_eq!(grid.cell(2, 2), "tmp2/bin/sheet.pdf");
        assert_eq!(grid.lines()[5], "└── tmp2/local/");
    }

    #[test]
    fn test_rail_spans_whole_subtree() {
        // a/
        // ├── b/
        // │   ├── c/
        // │   │   └── d
        // │   └── e
        // └── f/
        //     └── g
        let root = dir(
            "a",
            0,
            vec![
                dir(
                    "a/b",
                    1,
                    vec![dir("a/b/c", 2, vec![file("a/b/c/d", 3)]), file("a/b/e", 2)],
                ),
                dir("a/f", 1, vec![file("a/f/g", 2)]),
            ],
        );
        let grid = render_tree(&root, 3, false).unwrap();
        assert_eq!(
            grid.lines(),
            [
                "a/",
                "├── b/",
                "│   ├── c/",
                "│   │   └── d",
                "│   └── e",
                "└── f/",
                "    └── g",
            ]
        );
    }

    #[test]
    fn test_rows_match_descendants() {
        let root = sample();
        let grid = render_tree(&root, 2, false).unwrap();
        assert_eq!(grid.rows(), 1 + root.descendants());

        let bin = &root.children()[0];
        let mut scratch = Grid {
            cells: vec![vec![String::new(); 3]; 1 + root.descendants()],
            labels: vec![LabelCell::default(); 1 + root.descendants()],
        };
        assert_eq!(scratch.place(bin, 0, false), 1 + bin.descendants());
        assert_eq!(scratch.place(&root, 0, false), 1 + root.descendants());
    }

    #[test]
    fn test_render_single_entry() {
        let root = dir("empty", 0, Vec::new());
        let grid = render_tree(&root, 0, false).unwrap();
        assert_eq!(grid.lines(), ["empty/"]);
    }

    #[test]
    fn test_extra_columns_stay_empty() {
        let root = dir("tmp2", 0, vec![dir("tmp2/bin", 1, Vec::new())]);
        let grid = render_tree(&root, 2, false).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.cell(1, 2), "");
        assert_eq!(grid.lines(), ["tmp2/", "└── bin/"]);
    }

    #[test]
    fn test_grid_too_narrow() {
        let result = render_tree(&sample(), 1, false);
        assert!(matches!(
            result,
            Err(TreeError::GridTooNarrow {
                depth: 2,
                columns: 2
            })
        ));
    }

    #[test]
    fn test_write_without_color_matches_lines() {
        let grid = render_tree(&sample(), 2, false).unwrap();
        let mut out = NoColor::new(Vec::new());
        grid.write_to(&mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, grid.lines().join("\n") + "\n");
    }

    #[test]
    fn test_write_with_color_marks_directories() {
        let grid = render_tree(&sample(), 2, false).unwrap();
        let mut out = Buffer::ansi();
        grid.write_to(&mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("bin/"));
        assert!(text.contains("sheet.pdf"));
    }
}

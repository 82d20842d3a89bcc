//! File I/O for puzzle givens and solved boards

use super::Board;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a givens string from a text file.
///
/// The file holds the puzzle read left-to-right, top-to-bottom, usually one
/// board row per line. Line breaks are stripped; every other character is
/// position-significant, so a non-symbol character such as '.' or a space
/// marks an unconstrained cell.
pub fn load_givens_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    Ok(strip_line_breaks(&content))
}

/// Flatten puzzle text into the cell-indexed givens string
pub fn strip_line_breaks(content: &str) -> String {
    content.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Save a rendered board to a text file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = board.to_string();
    content.push('\n');

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example puzzle files in the given directory
pub fn create_example_puzzles<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // "AI Escargot", a well-known 9x9 puzzle with a unique solution
    let escargot = "\
1....7.9.
.3..2...8
..96..5..
..53..9..
.1..8...2
6....4...
3......1.
.4......7
..7...3..
";

    // Only the first row fixed: intentionally under-constrained
    let first_row = "\
123456789
.........
.........
.........
.........
.........
.........
.........
.........
";

    // An empty 16x16 board for rank-4 runs
    let hexadoku = format!("{}\n", vec![".".repeat(16); 16].join("\n"));

    std::fs::write(dir.join("escargot.txt"), escargot)?;
    std::fs::write(dir.join("first_row.txt"), first_row)?;
    std::fs::write(dir.join("hexadoku_empty.txt"), hexadoku)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_strip_line_breaks_keeps_spaces() {
        let flat = strip_line_breaks("12 .\r\n..3 \n");
        assert_eq!(flat, "12 ...3 ");
    }

    #[test]
    fn test_load_givens_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("puzzle.txt");
        std::fs::write(&path, "12..\n34..\n....\n....\n").unwrap();

        let givens = load_givens_from_file(&path).unwrap();
        assert_eq!(givens, "12..34..........");
    }

    #[test]
    fn test_save_and_reload_board() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/board.txt");

        let model = crate::mip::PuzzleModel::build(2, "1234341221434321").unwrap();
        let board = Board::from_givens(&model);
        save_board_to_file(&board, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reloaded = Board::from_text(&content).unwrap();
        assert_eq!(reloaded, board);
    }

    #[test]
    fn test_create_example_puzzles() {
        let dir = tempdir().unwrap();
        create_example_puzzles(dir.path()).unwrap();

        let escargot = load_givens_from_file(dir.path().join("escargot.txt")).unwrap();
        assert_eq!(escargot.chars().count(), 81);
        assert_eq!(escargot.chars().filter(|c| c.is_ascii_digit()).count(), 23);

        let hexadoku = load_givens_from_file(dir.path().join("hexadoku_empty.txt")).unwrap();
        assert_eq!(hexadoku.chars().count(), 256);
    }
}

//! Board codec: symbol tables, grid representation, puzzle file I/O

pub mod board;
pub mod io;
pub mod symbols;

pub use board::Board;
pub use io::{create_example_puzzles, load_givens_from_file, save_board_to_file, strip_line_breaks};
pub use symbols::{to_digit, to_symbol, EMPTY_SYMBOL, MAX_SYMBOLS};

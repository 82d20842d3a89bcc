//! Move arena for the exact-cover encoding
//!
//! A move is one candidate assignment "place value V in cell (row, col)".
//! All `N*N*N` moves are generated once, up front, together with index side
//! tables for the four grouping families the constraints range over. Nothing
//! here is mutated after construction.

use itertools::iproduct;

/// One candidate (cell, value) assignment, the unit decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Unique id in `[0, num_moves)`, computed as `cell * N + value`
    pub id: usize,
    pub row: usize,
    pub col: usize,
    /// Index of the M x M sub-grid containing the cell
    pub block: usize,
    pub value: usize,
}

/// Which grouping family a constraint group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// The possible values of one cell
    Cell,
    /// Placements of one value across one row
    RowValue,
    /// Placements of one value across one column
    ColValue,
    /// Placements of one value across one block
    BlockValue,
}

/// One constraint group: a set of mutually exclusive moves, exactly one of
/// which must hold in an accepted solution
#[derive(Debug, Clone, Copy)]
pub struct MoveGroup<'a> {
    pub kind: GroupKind,
    pub index: usize,
    pub moves: &'a [usize],
}

/// The immutable move arena plus grouping side tables for one rank
#[derive(Debug, Clone)]
pub struct MoveTable {
    rank: usize,
    side: usize,
    moves: Vec<Move>,
    cell_groups: Vec<Vec<usize>>,
    row_groups: Vec<Vec<usize>>,
    col_groups: Vec<Vec<usize>>,
    block_groups: Vec<Vec<usize>>,
}

impl MoveTable {
    /// Generate the full move set for a rank
    pub fn new(rank: usize) -> Self {
        let side = rank * rank;
        let num_cells = side * side;

        let mut moves = Vec::with_capacity(num_cells * side);
        let mut cell_groups = vec![Vec::with_capacity(side); num_cells];
        let mut row_groups = vec![Vec::with_capacity(side); side * side];
        let mut col_groups = vec![Vec::with_capacity(side); side * side];
        let mut block_groups = vec![Vec::with_capacity(side); side * side];

        for (cell, value) in iproduct!(0..num_cells, 0..side) {
            let id = cell * side + value;
            let row = cell / side;
            let col = cell % side;
            let block = (row / rank) * rank + col / rank;

            moves.push(Move {
                id,
                row,
                col,
                block,
                value,
            });

            cell_groups[cell].push(id);
            row_groups[value * side + row].push(id);
            col_groups[value * side + col].push(id);
            block_groups[value * side + block].push(id);
        }

        Self {
            rank,
            side,
            moves,
            cell_groups,
            row_groups,
            col_groups,
            block_groups,
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Board dimension N = rank * rank
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn num_cells(&self) -> usize {
        self.side * self.side
    }

    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }

    /// All moves, indexed by id
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The move id for a (cell, value) pair
    pub fn move_id(&self, cell: usize, value: usize) -> usize {
        cell * self.side + value
    }

    /// Candidate move ids for one cell
    pub fn moves_for_cell(&self, cell: usize) -> &[usize] {
        &self.cell_groups[cell]
    }

    /// Total number of constraint groups across the four families
    pub fn group_count(&self) -> usize {
        self.cell_groups.len()
            + self.row_groups.len()
            + self.col_groups.len()
            + self.block_groups.len()
    }

    /// Iterate every constraint group of the four families
    pub fn groups(&self) -> impl Iterator<Item = MoveGroup<'_>> {
        self.cell_groups
            .iter()
            .enumerate()
            .map(|(index, ids)| MoveGroup {
                kind: GroupKind::Cell,
                index,
                moves: ids.as_slice(),
            })
            .chain(
                self.row_groups
                    .iter()
                    .enumerate()
                    .map(|(index, ids)| MoveGroup {
                        kind: GroupKind::RowValue,
                        index,
                        moves: ids.as_slice(),
                    }),
            )
            .chain(
                self.col_groups
                    .iter()
                    .enumerate()
                    .map(|(index, ids)| MoveGroup {
                        kind: GroupKind::ColValue,
                        index,
                        moves: ids.as_slice(),
                    }),
            )
            .chain(
                self.block_groups
                    .iter()
                    .enumerate()
                    .map(|(index, ids)| MoveGroup {
                        kind: GroupKind::BlockValue,
                        index,
                        moves: ids.as_slice(),
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_counts_for_rank_3() {
        let table = MoveTable::new(3);
        assert_eq!(table.side(), 9);
        assert_eq!(table.num_cells(), 81);
        assert_eq!(table.num_moves(), 729);
        assert_eq!(table.moves().len(), 729);
    }

    #[test]
    fn test_move_counts_for_rank_4() {
        let table = MoveTable::new(4);
        assert_eq!(table.side(), 16);
        assert_eq!(table.num_cells(), 256);
        assert_eq!(table.num_moves(), 4096);
        assert_eq!(table.moves().len(), 4096);
    }

    #[test]
    fn test_move_fields_are_consistent() {
        let table = MoveTable::new(3);
        for (id, mv) in table.moves().iter().enumerate() {
            assert_eq!(mv.id, id);
            assert_eq!(mv.value, id % 9);
            let cell = id / 9;
            assert_eq!(mv.row, cell / 9);
            assert_eq!(mv.col, cell % 9);
            assert_eq!(mv.block, (mv.row / 3) * 3 + mv.col / 3);
        }
    }

    #[test]
    fn test_block_indexing() {
        let table = MoveTable::new(3);
        // cell (4, 7) sits in the middle-right block
        let id = table.move_id(4 * 9 + 7, 0);
        assert_eq!(table.moves()[id].block, 5);
    }

    #[test]
    fn test_group_structure() {
        let table = MoveTable::new(3);
        assert_eq!(table.group_count(), 4 * 81);
        assert_eq!(table.groups().count(), 4 * 81);

        for group in table.groups() {
            assert_eq!(group.moves.len(), 9, "{:?} group {}", group.kind, group.index);
        }
    }

    #[test]
    fn test_every_move_appears_once_per_family() {
        let table = MoveTable::new(2);
        let mut appearances = vec![0usize; table.num_moves()];
        for group in table.groups() {
            for &id in group.moves {
                appearances[id] += 1;
            }
        }
        assert!(appearances.iter().all(|&count| count == 4));
    }

    #[test]
    fn test_cell_group_is_contiguous_ids() {
        let table = MoveTable::new(2);
        assert_eq!(table.moves_for_cell(5), &[20, 21, 22, 23]);
    }
}

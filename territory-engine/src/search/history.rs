/// History heuristic table, indexed by destination cell. Unlike the
/// teacher's `[color][from][to]` shape (chess moves have a "from"
/// square), a placement has only a target cell, so spec.md 4.5's
/// `historyTable[p.r][p.c]` is exactly this: one N×N table per worker.
pub struct HistoryTable {
    size: usize,
    data: Vec<i32>,
}

impl HistoryTable {
    pub fn new(board_size: u8) -> Self {
        let size = board_size as usize;
        Self { size, data: vec![0; size * size] }
    }

    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.size + col as usize
    }

    pub fn get(&self, row: u8, col: u8) -> i32 {
        self.data[self.index(row, col)]
    }

    /// Adds `depth^2` to every placement cell of a move that caused a
    /// beta cutoff, per spec.md 4.5 step 5.
    pub fn add_cutoff_bonus(&mut self, placements: &[territory_core::Placement], depth: u8) {
        let bonus = depth as i32 * depth as i32;
        for p in placements {
            let i = self.index(p.row, p.col);
            self.data[i] += bonus;
        }
    }

    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
}

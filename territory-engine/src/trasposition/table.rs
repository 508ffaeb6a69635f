use super::entry::TTEntry;

/// A fixed-capacity, single-slot-per-bucket transposition table.
///
/// spec.md 3 describes the table as "an unbounded mapping from hash to
/// (score, depth, flag)"; spec.md 9 explicitly allows replacing this with
/// "a fixed-capacity open-addressed table with depth-preferred
/// replacement" as an accelerator-only refinement. Since spec.md 5
/// requires each worker's TT to be private, unshared state, there is no
/// need for the teacher's lock-free `unsafe` pointer trick (justified
/// there only by cross-thread sharing) — this is a plain safe `Vec`.
pub struct TTable {
    size: usize,
    entries: Vec<Option<TTEntry>>,
}

impl TTable {
    pub fn new(size: usize) -> Self {
        Self { size, entries: vec![None; size] }
    }

    fn index(&self, zobrist: u64) -> usize {
        (zobrist as usize) % self.size
    }

    /// Returns the stored entry for `zobrist`, if the slot's key matches.
    /// Callers are responsible for checking `depth`/bound semantics
    /// before treating the score as usable (spec.md 4.5 step 1).
    pub fn probe(&self, zobrist: u64) -> Option<&TTEntry> {
        let slot = &self.entries[self.index(zobrist)];
        slot.as_ref().filter(|e| e.zobrist == zobrist)
    }

    /// Depth-preferred replacement: only overwrite an existing entry for
    /// a *different* position if the new entry searched at least as deep.
    pub fn store(&mut self, entry: TTEntry) {
        let idx = self.index(entry.zobrist);
        match &self.entries[idx] {
            Some(existing) if existing.zobrist != entry.zobrist && existing.depth > entry.depth => {
                // Keep the deeper, unrelated entry.
            }
            _ => self.entries[idx] = Some(entry),
        }
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
    }
}

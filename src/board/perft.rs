use super::{Move, Position};

impl Position {
    /// Count king-safe move sequences of length `depth` for the side to move.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let side = self.side_to_move;
        let mut nodes = 0;
        for (from, _) in self.pieces(side) {
            let targets = self.legal_moves(from);
            if depth == 1 {
                nodes += targets.len() as u64;
                continue;
            }
            for to in targets.iter() {
                let (next, _) = self.with_move(Move::new(from, to));
                nodes += next.perft(depth - 1);
            }
        }
        nodes
    }
}

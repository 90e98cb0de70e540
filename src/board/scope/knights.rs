use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// Fixed-offset scope: every precomputed target not held by `color`.
    pub(crate) fn jump_scope(
        &self,
        table: &[SquareSet; 64],
        from: Square,
        color: Color,
    ) -> SquareSet {
        table[from.as_index()]
            .iter()
            .filter(|&to| self.board.color_on(to) != Some(color))
            .collect()
    }
}

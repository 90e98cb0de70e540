use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// Cast a ray along each direction until the edge or the first piece.
    ///
    /// An enemy piece ends the ray and is included; an own piece ends it
    /// and is not.
    pub(crate) fn ray_scope(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> SquareSet {
        let mut scope = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.board.color_on(next) {
                    None => scope.insert(next),
                    Some(occupant) => {
                        if occupant != color {
                            scope.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        scope
    }
}

use crate::game_state::chess_types::{Board, Square};

/// Resumable cursor walking outward along a fixed set of rays.
///
/// Each call advances one step on the current ray. A ray ends when it leaves
/// the board, after `max_steps` steps, or after yielding a square holding a
/// real piece (that square is still yielded since it may be capturable).
#[derive(Debug, Clone)]
pub struct RayCandidates<'a> {
    board: &'a Board,
    from: Square,
    directions: &'static [(i8, i8)],
    max_steps: u8,
    ray: usize,
    current: Square,
    steps: u8,
}

impl<'a> RayCandidates<'a> {
    pub fn new(
        board: &'a Board,
        from: Square,
        directions: &'static [(i8, i8)],
        max_steps: u8,
    ) -> Self {
        Self {
            board,
            from,
            directions,
            max_steps,
            ray: 0,
            current: from,
            steps: 0,
        }
    }

    fn end_ray(&mut self) {
        self.ray += 1;
        self.current = self.from;
        self.steps = 0;
    }
}

impl Iterator for RayCandidates<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(&(d_file, d_rank)) = self.directions.get(self.ray) {
            if self.steps < self.max_steps {
                let next = self.current.offset(d_file, d_rank);
                if next.in_bounds() {
                    if self.board.is_occupied(next) {
                        self.end_ray();
                    } else {
                        self.current = next;
                        self.steps += 1;
                    }
                    return Some(next);
                }
            }
            self.end_ray();
        }
        None
    }
}

//! Hand-built game trees for driving the selector through positions that are
//! awkward or impossible to reach on a real board.

use chess_core::{Board, Move, Square};
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

#[derive(Debug, Default, Clone)]
pub struct Node {
    pub moves: Vec<Move>,
    pub checkmate: bool,
    pub attacked: HashSet<Square>,
}

/// A [`Board`] whose positions are identified by the moves leading to them.
///
/// Unscripted positions have no moves, no mate and no attacked squares.
/// Undoing anything but the last move made panics.
#[derive(Debug, Default)]
pub struct ScriptedBoard {
    nodes: HashMap<Vec<Move>, Node>,
    path: Vec<Move>,
    pub makes: usize,
    pub max_depth: usize,
    pub attack_queries: Cell<usize>,
}

impl ScriptedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, path: &[Move]) -> &mut Node {
        self.nodes.entry(path.to_vec()).or_default()
    }

    pub fn moves(&mut self, path: &[Move], moves: &[Move]) -> &mut Self {
        self.node(path).moves = moves.to_vec();
        self
    }

    pub fn mate(&mut self, path: &[Move]) -> &mut Self {
        self.node(path).checkmate = true;
        self
    }

    pub fn attacked(&mut self, path: &[Move], sq: Square) -> &mut Self {
        self.node(path).attacked.insert(sq);
        self
    }

    pub fn path(&self) -> &[Move] {
        &self.path
    }

    fn current(&self) -> Option<&Node> {
        self.nodes.get(&self.path)
    }
}

impl Board for ScriptedBoard {
    fn legal_moves(&self) -> Vec<Move> {
        self.current().map(|n| n.moves.clone()).unwrap_or_default()
    }

    fn make_move(&mut self, mv: Move) {
        self.path.push(mv);
        self.makes += 1;
        self.max_depth = self.max_depth.max(self.path.len());
    }

    fn undo_move(&mut self, mv: Move) {
        assert_eq!(self.path.pop(), Some(mv), "undo_move out of order");
    }

    fn is_checkmate(&self) -> bool {
        self.current().is_some_and(|n| n.checkmate)
    }

    fn square_is_attacked_by_opponent(&self, sq: Square) -> bool {
        self.attack_queries.set(self.attack_queries.get() + 1);
        self.current().is_some_and(|n| n.attacked.contains(&sq))
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.path.hash(&mut hasher);
        hasher.finish()
    }
}

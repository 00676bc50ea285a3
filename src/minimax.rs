use log::trace;

use crate::game::Game;

const WIN: i32 = 1;
const DRAW: i32 = 0;
const LOSS: i32 = -1;

/// Outside every reachable score, used as the open alpha-beta window.
const INF: i32 = WIN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchResult<A> {
    pub best_move: A,
    /// -1, 0 or 1 from the searching player's side.
    pub score: i32,
    /// Positions visited, root children included.
    pub nodes: u64,
}

/// Exhaustive minimax with alpha-beta pruning.
///
/// Terminal positions score the same at any depth, so a win now and a win in
/// five plies look identical to the engine.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Minimax;

impl Minimax {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Best move for `player`, or `None` when `game` has no move left.
    ///
    /// Children of the root are scanned in `get_available_moves` order and
    /// only a strictly better score replaces the current pick, so ties go to
    /// the first move. `game` itself is never touched.
    pub(crate) fn find_best_move<G: Game>(
        &self,
        game: &G,
        player: G::Player,
    ) -> Option<SearchResult<G::Action>> {
        trace!("searching for {:?}:\n{}", player, game);
        let mut search = Search {
            game: game.clone(),
            player,
            opponent: G::opponent(player),
            nodes: 0,
        };

        let mut best: Option<(G::Action, i32)> = None;
        for action in search.game.get_available_moves() {
            search.game.place(action, player);
            let score = search.minimax(false, -INF, INF);
            search.game.undo(action);
            trace!("{:?} scores {}", action, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }

        let (best_move, score) = best?;
        Some(SearchResult {
            best_move,
            score,
            nodes: search.nodes,
        })
    }
}

/// Scratch state for one call to `find_best_move`. Every `place` is paired
/// with an `undo` before the frame returns.
struct Search<G: Game> {
    game: G,
    player: G::Player,
    opponent: G::Player,
    nodes: u64,
}

impl<G: Game> Search<G> {
    fn terminal_score(&self) -> Option<i32> {
        if self.game.is_winner(self.opponent) {
            Some(LOSS)
        } else if self.game.is_winner(self.player) {
            Some(WIN)
        } else if self.game.done() {
            Some(DRAW)
        } else {
            None
        }
    }

    fn minimax(&mut self, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score() {
            return score;
        }

        if maximizing {
            let mut best = -INF;
            for action in self.game.get_available_moves() {
                self.game.place(action, self.player);
                let score = self.minimax(false, alpha, beta);
                self.game.undo(action);

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for action in self.game.get_available_moves() {
                self.game.place(action, self.opponent);
                let score = self.minimax(true, alpha, beta);
                self.game.undo(action);

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

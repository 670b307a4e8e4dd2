use crate::engine::clock::{self, Deadline};
use crate::engine::config::EngineConfig;
use crate::engine::eval::PositionalEvaluator;
use crate::engine::move_list::MoveList;
use crate::engine::movegen::generate_moves;
use crate::engine::{Evaluator, Move, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Player};
use crate::logic::rules::{apply_move, is_terminal};
use std::sync::Arc;

/// Bound used for the (-inf, +inf) window. Larger than any evaluation.
pub const SCORE_INF: i32 = 1_000_000;

pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: PositionalEvaluator,
    nodes_searched: u64,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: PositionalEvaluator::new(&config),
            config,
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = PositionalEvaluator::new(&config);
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn evaluator(&self) -> &PositionalEvaluator {
        &self.evaluator
    }

    /// Root moves for `player`, best first by the static score of the
    /// position each one leads to. Ties keep row-major order.
    pub fn ordered_moves(&self, board: &Board, player: Player) -> MoveList {
        let mut moves = generate_moves(board, player);
        for mv in moves.iter_mut() {
            let mut child = *board;
            let (r, c) = mv.coords();
            apply_move(&mut child, player, r, c);
            mv.score = self.evaluator.evaluate(&child, player);
        }
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }

    /// Minimax with alpha-beta pruning. Scores are always from `me`'s point of
    /// view; `maximizing` says whether `me` is the side to move at this node.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        me: Player,
        deadline: Deadline,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 || deadline.expired() || is_terminal(board) {
            return self.evaluator.evaluate(board, me);
        }

        let mover = if maximizing { me } else { me.opponent() };
        let moves = generate_moves(board, mover);

        // Pass: the opponent must have a move, otherwise the node is terminal.
        if moves.is_empty() {
            return self.alpha_beta(board, depth - 1, alpha, beta, !maximizing, me, deadline);
        }

        if maximizing {
            let mut value = -SCORE_INF;
            for mv in &moves {
                let mut child = *board;
                let (r, c) = mv.coords();
                apply_move(&mut child, mover, r, c);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false, me, deadline);
                value = value.max(score);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = SCORE_INF;
            for mv in &moves {
                let mut child = *board;
                let (r, c) = mv.coords();
                apply_move(&mut child, mover, r, c);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true, me, deadline);
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(
        &mut self,
        board: &Board,
        player: Player,
        limit: SearchLimit,
    ) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start_time = clock::now();

        let moves = self.ordered_moves(board, player);
        if moves.is_empty() {
            log::debug!("no legal move for {player:?}");
            return None;
        }

        let (max_depth, deadline) = match limit {
            SearchLimit::Depth(d) => (d.max(1), Deadline::unbounded()),
            SearchLimit::Time(t) => (self.config.max_depth.max(1), Deadline::after_ms(t)),
        };

        let mut best_score = -SCORE_INF;
        let mut best_move = None;

        for mv in &moves {
            let mut child = *board;
            let (r, c) = mv.coords();
            apply_move(&mut child, player, r, c);

            let score = self.alpha_beta(
                &child,
                max_depth - 1,
                -SCORE_INF,
                SCORE_INF,
                false,
                player,
                deadline,
            );
            log::debug!(
                "root move ({r}, {c}): ordering {}, score {score}",
                mv.score
            );

            if score > best_score {
                best_score = score;
                best_move = Some(Move { score, ..*mv });
            }

            if deadline.expired() {
                log::debug!("time budget exhausted after ({r}, {c})");
                break;
            }
        }

        let elapsed = clock::now() - start_time;
        best_move.map(|mv| {
            let stats = SearchStats {
                depth: max_depth,
                nodes: self.nodes_searched,
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                time_ms: elapsed.max(0.0) as u64,
                score: best_score,
            };
            log::info!(
                "{player:?} plays ({}, {}) score {} nodes {} in {}ms",
                mv.row,
                mv.col,
                stats.score,
                stats.nodes,
                stats.time_ms
            );
            (mv, stats)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AlphaBetaEngine {
        AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_ordering_is_best_first() {
        let engine = engine();
        let board: Board = "
            .WB.....
            ........
            ........
            ...WB...
            ...BW...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let moves = engine.ordered_moves(&board, Player::Black);
        assert!(!moves.is_empty());
        let scores: Vec<i32> = moves.iter().map(|m| m.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        // Taking the corner also flips White's C-square at (0,1).
        assert_eq!(moves[0].coords(), (0, 0));
    }

    #[test]
    fn test_nodes_are_counted() {
        let mut engine = engine();
        let (_, stats) = engine
            .search(&Board::new(), Player::Black, SearchLimit::Depth(3))
            .unwrap();
        assert_eq!(stats.depth, 3);
        assert!(stats.nodes > 4);
    }

    #[test]
    fn test_depth_zero_is_treated_as_one() {
        let mut engine = engine();
        let (mv, stats) = engine
            .search(&Board::new(), Player::Black, SearchLimit::Depth(0))
            .unwrap();
        assert_eq!(stats.depth, 1);
        assert_eq!(mv.score, stats.score);
    }

    #[test]
    fn test_update_config_rebuilds_evaluator() {
        let mut engine = engine();
        let config = EngineConfig {
            weight_corner: 500,
            ..EngineConfig::default()
        };
        engine.update_config(Arc::new(config));
        assert_eq!(engine.config().weight_corner, 500);
        assert_eq!(engine.evaluator().weight(7, 7), 501);
    }
}

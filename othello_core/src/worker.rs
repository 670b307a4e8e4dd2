use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Move, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Player};
use gloo_worker::{HandlerId, Worker, WorkerScope};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
pub enum Input {
    ComputeMove(Board, Player, SearchLimit, EngineConfig),
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Output {
    MoveFound(Move, SearchStats),
    /// The side to move has no legal move; the caller passes the turn.
    NoMove,
}

pub struct GameWorker {
    engine: Option<AlphaBetaEngine>,
}

impl GameWorker {
    fn compute(
        &mut self,
        board: &Board,
        player: Player,
        limit: SearchLimit,
        config: EngineConfig,
    ) -> Output {
        let config = Arc::new(config);
        let engine = self
            .engine
            .get_or_insert_with(|| AlphaBetaEngine::new(config.clone()));
        engine.update_config(config);

        engine
            .search(board, player, limit)
            .map_or(Output::NoMove, |(mv, stats)| Output::MoveFound(mv, stats))
    }
}

impl Worker for GameWorker {
    type Input = Input;
    type Message = ();
    type Output = Output;

    fn create(_scope: &WorkerScope<Self>) -> Self {
        Self { engine: None }
    }

    fn update(&mut self, _scope: &WorkerScope<Self>, _msg: Self::Message) {}

    fn received(&mut self, scope: &WorkerScope<Self>, msg: Self::Input, id: HandlerId) {
        match msg {
            Input::ComputeMove(board, player, limit, config) => {
                let output = self.compute(&board, player, limit, config);
                scope.respond(id, output);
            }
        }
    }
}

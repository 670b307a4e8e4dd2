use crate::engine::SearchLimit;
use crate::logic::eval_constants::{
    WEIGHT_CORNER, WEIGHT_C_SQUARE, WEIGHT_DISC, WEIGHT_EDGE, WEIGHT_X_SQUARE,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: u8 = 6;
pub const DEFAULT_TIME_BUDGET_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Search Parameters
    pub max_depth: u8, // Plies, root move included
    pub time_budget_ms: u64,

    // Evaluation Parameters
    pub weight_corner: i32,
    pub weight_c_square: i32,
    pub weight_x_square: i32,
    pub weight_edge: i32,
    pub weight_disc: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,

            weight_corner: WEIGHT_CORNER,
            weight_c_square: WEIGHT_C_SQUARE,
            weight_x_square: WEIGHT_X_SQUARE,
            weight_edge: WEIGHT_EDGE,
            weight_disc: WEIGHT_DISC,
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    max_depth: Option<u8>,
    time_budget_ms: Option<u64>,

    weight_corner: Option<f32>,
    weight_c_square: Option<f32>,
    weight_x_square: Option<f32>,
    weight_edge: Option<f32>,
    weight_disc: Option<f32>,
}

impl EngineConfig {
    /// The configured depth under the configured wall-clock budget.
    pub const fn time_limit(&self) -> SearchLimit {
        SearchLimit::Time(self.time_budget_ms)
    }

    /// Loads a tuning file. Weights are scale factors on the defaults; depth
    /// and time budget are absolute.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        Ok(Self {
            max_depth: json_config.max_depth.unwrap_or(default.max_depth),
            time_budget_ms: json_config
                .time_budget_ms
                .unwrap_or(default.time_budget_ms),

            weight_corner: apply_scale(default.weight_corner, json_config.weight_corner),
            weight_c_square: apply_scale(default.weight_c_square, json_config.weight_c_square),
            weight_x_square: apply_scale(default.weight_x_square, json_config.weight_x_square),
            weight_edge: apply_scale(default.weight_edge, json_config.weight_edge),
            weight_disc: apply_scale(default.weight_disc, json_config.weight_disc),
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(default_val: i32, scale: Option<f32>) -> i32 {
    scale.map_or(default_val, |s| (default_val as f32 * s) as i32)
}

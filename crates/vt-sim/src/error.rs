use thiserror::Error;

use vt_core::CoreError;
use vt_plan::PlanError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("floor plan error: {0}")]
    Plan(#[from] PlanError),
}

pub type SimResult<T> = Result<T, SimError>;

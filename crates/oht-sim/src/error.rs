use oht_core::OhtError;
use oht_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] OhtError),

    #[error("dock offset table: {0}")]
    Layout(#[from] LayoutError),
}

pub type SimResult<T> = Result<T, SimError>;

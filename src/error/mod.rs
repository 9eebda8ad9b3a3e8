use crate::config::ConfigError;
use crate::export::ExportError;
use thiserror::Error;

pub type CropResult<T> = std::result::Result<T, CropError>;

#[derive(Debug, Error)]
pub enum CropError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

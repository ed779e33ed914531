use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Plate weight {0} must be greater than 0 and at most 1000.")]
    InvalidPlateWeight(f64),
    #[error("Plate quantity {0} must be between 0 and 100.")]
    InvalidQuantity(i64),
    #[error("Max plates per side {0} must be between 1 and 20.")]
    InvalidMaxPlates(i64),
    #[error("Handle weight {0} must be a non-negative number.")]
    InvalidHandleWeight(f64),
    #[error("Invalid plate '{0}', expected WEIGHTxCOUNT.")]
    InvalidPlate(String),
    #[error("Invalid mode '{0}', expected single or pair.")]
    InvalidMode(String),
    #[error("Invalid unit '{0}', expected kg or lbs.")]
    InvalidUnit(String),
    #[error("Plate inventory spans {0} combinations per side, too many to enumerate.")]
    SearchSpaceTooLarge(u128),
    #[error("Could not locate a configuration directory.")]
    ConfigDirNotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

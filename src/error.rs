#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("similarity weights (edit + keyboard + phonetic) must sum to 1.0, found {sum}")]
    InvalidWeights { sum: f64 },

    #[error("similarity weights must be non-negative, found {weight}")]
    NegativeWeight { weight: f64 },
}

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("could not plan a route")]
    NoRouteFound,
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("duplicate location name: {0}")]
    DuplicateLocation(String),
    #[error("invalid coordinates for {name}: ({lat}, {lon})")]
    InvalidCoordinates { name: String, lat: f64, lon: f64 },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }
}

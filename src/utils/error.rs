use thiserror::Error;

// Define error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),
    #[error("Missing geometry type")]
    MissingGeometryType,
    #[error("Missing geometry")]
    MissingGeometry,
    #[error("Invalid coordinates")]
    InvalidCoordinates,
    #[error("Invalid feature")]
    InvalidFeature,
    #[error("Unrecognized GeoJSON container")]
    UnrecognizedContainer,
    #[error("Malformed GeoJSON text: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

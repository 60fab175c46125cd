use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
}

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(#[source] SurfaceError),
    #[error("Radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("Pixel density must be positive and finite, got {0}")]
    InvalidDensity(f64),
    #[error("Drawing failed: {0}")]
    Draw(#[from] SurfaceError),
}

//! Compositing errors.

use std::error::Error;
use std::fmt;
use std::io;


/// Error that may occur during compositing.
#[derive(Debug)]
pub enum ComposeError {
    /// No base image has been loaded into the scene.
    NoImage,
    /// The rasterization backend failed.
    Raster(RasterError),
}

impl From<RasterError> for ComposeError {
    fn from(input: RasterError) -> Self {
        ComposeError::Raster(input)
    }
}

impl Error for ComposeError {
    fn description(&self) -> &str { "compositing error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            ComposeError::NoImage => None,
            ComposeError::Raster(ref e) => Some(e),
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::NoImage => write!(fmt, "no image loaded to composite"),
            ComposeError::Raster(ref e) => write!(fmt, "failed to rasterize the scene: {}", e),
        }
    }
}


/// Error from the rasterization backend.
#[derive(Debug)]
pub enum RasterError {
    /// The region to snapshot has no area.
    EmptyRegion,
    /// The backend's drawing surface failed.
    Backend(io::Error),
}

impl Error for RasterError {
    fn description(&self) -> &str { "rasterization error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            RasterError::EmptyRegion => None,
            RasterError::Backend(ref e) => Some(e),
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RasterError::EmptyRegion => write!(fmt, "nothing to rasterize: the region is empty"),
            RasterError::Backend(ref e) => write!(fmt, "drawing surface failure: {}", e),
        }
    }
}

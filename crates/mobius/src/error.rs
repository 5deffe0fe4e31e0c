use mobius_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A generator parameter is outside its domain. Nothing was sampled or registered.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The scene host refused an operation.
    #[error("scene host failed: {0}")]
    Scene(#[from] SceneError),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Lumen Core - asset loading shared by the renderer and the CLI.
//!
//! Currently this is the image texture used for equirectangular skyboxes.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::Texture;
//!
//! let sky = Texture::load("skybox.png")?;
//! let horizon = sky.sample(0.5, 0.5);
//! ```

pub mod texture;

pub use texture::{Texture, TextureError, TextureResult};

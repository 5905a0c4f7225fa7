//! Single-sphere ray tracer
//!
//! Casts one orthographic ray per pixel at a sphere and shades hits with a
//! Lambertian term from one point light. Outputs lossless 8-bit RGB images.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod sphere;
pub mod light;
pub mod shading;
pub mod scene;
pub mod camera;
pub mod output;
pub mod error;

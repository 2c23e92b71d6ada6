//! Camera control for the grid view.

pub mod camera;

pub use camera::CameraController;

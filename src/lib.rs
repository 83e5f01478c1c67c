pub mod camera;
pub mod canvas;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod scene;

pub mod camera;
pub mod color;
pub mod geometry;
pub mod light;
pub mod pixel;
pub mod shapes;
pub mod transform;

pub use camera::{ProjectedPoint, ProjectionConfig, Projector};
pub use color::Color;
pub use geometry::{Face, FaceColor, Geometry};
pub use light::PointLight;
pub use pixel::Pixel;
pub use shapes::Shape;
pub use transform::{rotate_xy, Rotation};

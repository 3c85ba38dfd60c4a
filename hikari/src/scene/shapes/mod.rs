mod mesh;
mod sphere;

pub use mesh::Mesh;
pub use sphere::Sphere;

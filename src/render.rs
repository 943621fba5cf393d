/// Primitive shapes and their rasterization.
pub mod primitives;
/// The accumulating paint surface that shapes are drawn onto.
pub mod surface;

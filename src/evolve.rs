/// Progress curve mapping elapsed time to a per-frame budget.
pub mod curve;
/// Pixel sampling from the source buffer.
pub mod sampler;

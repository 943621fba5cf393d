/// Render configuration boundary object.
pub mod config;
/// Source pixel buffer boundary object.
pub mod source;

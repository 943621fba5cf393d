/// Session-oriented driving API for evolving a canvas.
pub mod art_session;

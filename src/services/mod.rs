pub mod renderer;
pub mod session_store;

pub use renderer::{RenderService, RenderedPng};
pub use session_store::{session_id, ImageSession, SessionStore};

mod color;
mod render;

pub use color::{normalize_color, DEFAULT_COLOR};
pub use render::{render_validated, RenderError, RenderRequest, RenderRequestBuilder, Renderer};
pub use render::{DEFAULT_BACKGROUND, DEFAULT_SIZE_MM};

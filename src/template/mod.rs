pub mod render;
pub mod store;

pub use render::{render, render_batch, write_json};
pub use store::{TemplateKind, TemplateStore};

pub mod render;

pub use render::{DelimitedRenderer, JsonRenderer, OutputFormat, TextRenderer};

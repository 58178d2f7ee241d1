mod builder;
mod output;
mod pipeline;
mod records;
mod render;

pub use builder::Builder;

mod component;
mod panels;
mod render;

pub use component::KnowledgeTree;

pub mod render;
pub mod show;
pub mod vars;

//! CLI command implementations.

pub(crate) mod redirects;
pub(crate) mod render;

pub(crate) use redirects::RedirectsArgs;
pub(crate) use render::RenderArgs;

//! Filter rendering errors.

/// Error returned when filter markup cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

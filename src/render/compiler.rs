//! Markup compiler boundary
//!
//! The typesetting engine that turns statement markup into an SVG document
//! lives outside this crate (a wasm compiler on the deployed site). This
//! trait is the whole of the contract the renderer needs from it.

/// Compilation failure, already reduced to a displayable message
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CompileError(pub String);

/// Opaque markup-to-SVG compiler
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait MarkupCompiler {
    /// Compile markup into an SVG string
    async fn compile(&self, source: &str) -> Result<String, CompileError>;
}

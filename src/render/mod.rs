//! Document rendering
//!
//! Converts a tournament's statement markup into embeddable SVG through the
//! [`MarkupCompiler`] boundary. Rendering is asynchronous and restartable:
//! each new input supersedes any in-flight render (last input wins), and a
//! result that resolves after the consuming view detached is discarded
//! without touching state or surfacing an error.

pub mod compiler;

pub use compiler::{CompileError, MarkupCompiler};

use std::sync::{Arc, Mutex, MutexGuard};

/// Renderer display state
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// Compilation in progress (or not yet started) - show the skeleton
    Pending,
    /// Compiled SVG ready to embed
    Ready(String),
    /// Compilation failed; the offending source rides along so the view can
    /// echo it for debugging
    Failed { message: String, source: String },
}

/// Render controller for one embedded document. Cheap to clone; clones share
/// state, so a view can hand one half to a spawned render and keep the other
/// for reading.
#[derive(Clone)]
pub struct DocumentRenderer {
    compiler: Arc<dyn MarkupCompiler>,
    inner: Arc<Mutex<RendererInner>>,
}

struct RendererInner {
    generation: u64,
    detached: bool,
    state: RenderState,
}

impl DocumentRenderer {
    /// Create a renderer over the given compiler
    pub fn new(compiler: Arc<dyn MarkupCompiler>) -> Self {
        Self {
            compiler,
            inner: Arc::new(Mutex::new(RendererInner {
                generation: 0,
                detached: false,
                state: RenderState::Pending,
            })),
        }
    }

    /// Snapshot of the current display state
    pub fn state(&self) -> RenderState {
        lock(&self.inner).state.clone()
    }

    /// Render one input. Supersedes any in-flight render: whichever call was
    /// issued last owns the displayed result, regardless of completion order.
    pub async fn render(&self, source: &str) {
        let generation = {
            let mut inner = lock(&self.inner);
            inner.generation += 1;
            inner.state = RenderState::Pending;
            inner.generation
        };

        let result = self.compiler.compile(source).await;

        let mut inner = lock(&self.inner);
        if inner.detached || inner.generation != generation {
            tracing::debug!(generation, "discarding stale render result");
            return;
        }

        inner.state = match result {
            Ok(svg) => RenderState::Ready(svg),
            Err(err) => RenderState::Failed {
                message: err.to_string(),
                source: source.to_string(),
            },
        };
    }

    /// Mark the consuming view as gone. In-flight renders resolving after
    /// this point are dropped silently.
    pub fn detach(&self) {
        lock(&self.inner).detached = true;
    }
}

/// Poison-tolerant lock: a panicked test thread must not wedge the renderer
fn lock(inner: &Mutex<RendererInner>) -> MutexGuard<'_, RendererInner> {
    inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

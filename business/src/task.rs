//! Fire-and-forget task spawning.
//!
//! Natively tasks run on the ambient Tokio runtime, so `spawn` must be called
//! from within one (the UI binary enters a runtime before starting eframe).
//! On wasm they run on the browser event loop.

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

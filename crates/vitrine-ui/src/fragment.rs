//! Shared fragment loading (header/footer chrome).

use leptos::logging;
use wasm_bindgen_futures::spawn_local;

use crate::net::{self, FetchError};

/// Fetch the fragment at `path` (cache-busted) and replace the inner
/// content of the element with id `mount_id`.
pub async fn load_fragment(path: &str, mount_id: &str) -> Result<(), FetchError> {
    let html = net::fetch_text(&net::cache_busted(path)).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FetchError::NoWindow)?;
    let mount = document
        .get_element_by_id(mount_id)
        .ok_or_else(|| FetchError::MissingMount(mount_id.to_string()))?;
    mount.set_inner_html(&html);
    Ok(())
}

/// Fire-and-forget fragment load. Failures are logged to the console and
/// the mount point is left untouched; page rendering is never blocked.
pub fn spawn_fragment(path: String, mount_id: String) {
    spawn_local(async move {
        if let Err(e) = load_fragment(&path, &mount_id).await {
            logging::error!("Failed to load fragment {path}: {e}");
        }
    });
}

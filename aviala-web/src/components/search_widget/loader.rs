use aviala_search::Searcher;
use yew::UseStateHandle;

/// Lifecycle of the one-shot index fetch.
pub enum IndexState {
    Pending,
    Ready(Searcher),
    /// Load failed; searches degrade to an empty panel. No retry.
    Failed,
}

impl IndexState {
    #[must_use]
    pub fn searcher(&self) -> Option<&Searcher> {
        match self {
            Self::Ready(searcher) => Some(searcher),
            Self::Pending | Self::Failed => None,
        }
    }
}

/// Kick off the single background fetch of the document index.
#[cfg(target_arch = "wasm32")]
pub fn load_index(url: String, slot: UseStateHandle<IndexState>) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_index(&url).await {
            Ok(searcher) => slot.set(IndexState::Ready(searcher)),
            Err(message) => {
                log::error!("Failed to load search index from {url}: {message}");
                slot.set(IndexState::Failed);
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn fetch_index(url: &str) -> Result<Searcher, String> {
    let body = crate::dom::fetch_text(url)
        .await
        .map_err(|err| crate::dom::js_error_message(&err))?;
    let index = aviala_search::SearchIndex::from_json(&body).map_err(|err| err.to_string())?;
    Ok(Searcher::with_defaults(index))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_index(url: String, slot: UseStateHandle<IndexState>) {
    // Server-side rendering never fetches; the panel stays hidden.
    let _ = (url, slot);
}

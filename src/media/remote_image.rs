// SPDX-License-Identifier: MPL-2.0
//! Image cache for project screenshots.
//!
//! Project images are addressed by URL (or by local path when the
//! collection comes from disk). Each URL is fetched at most once while it
//! stays in the cache; views only ever read the cache and fall back to a
//! placeholder when an image is pending or failed.
//!
//! Capacity counts images, not bytes, and duplicate URLs share one entry.
//! The owner grows the cache with [`ImageCache::reserve`] to hold a whole
//! collection, so only URLs of an earlier collection are ever evicted, least
//! recently requested first.

use crate::app::config::DEFAULT_IMAGE_CACHE_ENTRIES;
use crate::error::FetchError;
use crate::projects::repository::http_client;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// State of one cached image.
#[derive(Debug, Clone)]
pub enum ImageEntry {
    /// A fetch is in flight.
    Pending,
    Ready(Handle),
    Failed,
}

/// LRU cache of decoded-on-demand image handles keyed by URL.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, ImageEntry>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images.
    ///
    /// A zero capacity falls back to the default size.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_IMAGE_CACHE_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as pending and returns `true` when a fetch must be started.
    ///
    /// Returns `false` if the URL is already pending, loaded, or known to fail.
    pub fn request(&mut self, url: &str) -> bool {
        if self.entries.contains(url) {
            self.entries.promote(url);
            return false;
        }
        self.entries.put(url.to_string(), ImageEntry::Pending);
        true
    }

    /// Grows the cache so that `entries` images fit without eviction. Never
    /// shrinks it.
    pub fn reserve(&mut self, entries: usize) {
        if let Some(wanted) = NonZeroUsize::new(entries) {
            if wanted > self.entries.cap() {
                tracing::debug!(
                    from = self.entries.cap().get(),
                    to = entries,
                    "growing image cache"
                );
                self.entries.resize(wanted);
            }
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Stores the outcome of a fetch started by [`ImageCache::request`].
    pub fn complete(&mut self, url: String, result: Result<Handle, FetchError>) {
        let entry = match result {
            Ok(handle) => ImageEntry::Ready(handle),
            Err(err) => {
                tracing::debug!(%url, error = %err, "image unavailable");
                ImageEntry::Failed
            }
        };
        self.entries.put(url, entry);
    }

    /// Looks up an entry without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageEntry> {
        self.entries.peek(url)
    }

    /// Returns the handle for `url` if it finished loading.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.peek(url) {
            Some(ImageEntry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

/// Downloads (or reads) the bytes behind `url` and wraps them in a handle.
///
/// Decoding happens lazily in the renderer, so a corrupt image surfaces as a
/// blank widget rather than an error here.
///
/// # Errors
///
/// Returns a [`FetchError`] for transport failures, non-2xx statuses and
/// unreadable local files.
pub async fn fetch(url: String) -> Result<Handle, FetchError> {
    let bytes = if url.starts_with("http://") || url.starts_with("https://") {
        let response = http_client()?.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(&url).await?
    };
    Ok(Handle::from_bytes(bytes))
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asynchronous art pipeline.
//!
//! Background images are loaded and decoded on a worker thread while the
//! synchronous vector/region work of a render pass completes. The cache
//! only commits a loader result if the image is still wanted by the
//! current pass, so a pass that was superseded by a newer snapshot can
//! never smear its art into the next frame. A zone whose art is missing or
//! broken still gets its overlays and click regions; only the background
//! is omitted.

use std::collections::HashMap;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

/// A decoded RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },
}

/// Capability of fetching an image by name. The presentation layer
/// consumes this; it does not care where assets come from.
pub trait AssetLoader: Send {
    fn load(&self, name: &str) -> Result<ImageData, AssetError>;
}

/// Loads assets from a directory on disk.
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, name: &str) -> Result<ImageData, AssetError> {
        let bytes = std::fs::read(self.root.join(name)).map_err(|source| AssetError::Io {
            name: name.to_string(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();
        Ok(ImageData {
            width: decoded.width(),
            height: decoded.height(),
            rgba: decoded.into_raw(),
        })
    }
}

/// Request sent to the loader worker; `pass` tags the render pass that
/// asked for the image.
#[derive(Debug, Clone)]
pub struct ArtRequest {
    pub pass: u64,
    pub name: String,
}

/// Loader reply, successful or not.
#[derive(Debug)]
pub struct ArtResult {
    pub pass: u64,
    pub name: String,
    pub image: Result<ImageData, AssetError>,
}

/// Spawn the loader worker thread. The worker exits when the request
/// channel closes or the UI stops listening.
pub fn spawn_loader(
    loader: impl AssetLoader + 'static,
    rx: Receiver<ArtRequest>,
    tx: Sender<ArtResult>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for req in rx.iter() {
            let image = loader.load(&req.name);
            if let Err(e) = &image {
                tracing::warn!(name = %req.name, error = %e, "asset load failed");
            }
            let done = tx
                .send(ArtResult {
                    pass: req.pass,
                    name: req.name,
                    image,
                })
                .is_err();
            if done {
                break;
            }
        }
    })
}

#[derive(Debug)]
enum ArtEntry {
    /// Load in flight; `wanted_pass` is the newest pass that drew it.
    Pending { wanted_pass: u64 },
    Ready(ImageData),
    Failed,
}

/// Availability answer for one `request` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtStatus {
    Ready,
    Pending,
    Failed,
}

/// UI-side cache of decoded images, keyed by asset name.
pub struct ArtCache {
    entries: HashMap<String, ArtEntry>,
    tx: Sender<ArtRequest>,
    pass: u64,
}

impl ArtCache {
    pub fn new(tx: Sender<ArtRequest>) -> Self {
        Self {
            entries: HashMap::new(),
            tx,
            pass: 0,
        }
    }

    /// Mark the start of a render pass; subsequent `request` calls record
    /// interest under this pass number.
    pub fn begin_pass(&mut self, pass: u64) {
        self.pass = pass;
    }

    /// Declare that the current pass draws `name` and report its
    /// availability. Unknown names enqueue a load; in-flight names have
    /// their interest renewed.
    pub fn request(&mut self, name: &str) -> ArtStatus {
        match self.entries.get_mut(name) {
            Some(ArtEntry::Ready(_)) => ArtStatus::Ready,
            Some(ArtEntry::Failed) => ArtStatus::Failed,
            Some(ArtEntry::Pending { wanted_pass }) => {
                *wanted_pass = self.pass;
                ArtStatus::Pending
            }
            None => {
                self.entries.insert(
                    name.to_string(),
                    ArtEntry::Pending {
                        wanted_pass: self.pass,
                    },
                );
                if self
                    .tx
                    .send(ArtRequest {
                        pass: self.pass,
                        name: name.to_string(),
                    })
                    .is_err()
                {
                    tracing::warn!(name, "art loader gone; request dropped");
                }
                ArtStatus::Pending
            }
        }
    }

    /// Commit a loader result. The result is accepted only if the image is
    /// still wanted by the current pass; a stale result is dropped (and its
    /// entry removed so the next pass that wants it re-requests). Returns
    /// whether the cache changed.
    pub fn commit(&mut self, result: ArtResult) -> bool {
        match self.entries.get(&result.name) {
            Some(ArtEntry::Pending { wanted_pass }) if *wanted_pass == self.pass => {
                let entry = match result.image {
                    Ok(image) => ArtEntry::Ready(image),
                    Err(_) => ArtEntry::Failed,
                };
                self.entries.insert(result.name, entry);
                true
            }
            Some(ArtEntry::Pending { wanted_pass }) => {
                tracing::debug!(
                    name = %result.name,
                    wanted = *wanted_pass,
                    current = self.pass,
                    "dropping stale art result"
                );
                self.entries.remove(&result.name);
                false
            }
            _ => false,
        }
    }

    /// Decoded image for `name`, if loaded.
    pub fn get(&self, name: &str) -> Option<&ImageData> {
        match self.entries.get(name) {
            Some(ArtEntry::Ready(image)) => Some(image),
            _ => None,
        }
    }

    /// All decoded images, for texture upload.
    pub fn ready_images(&self) -> impl Iterator<Item = (&str, &ImageData)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            ArtEntry::Ready(image) => Some((name.as_str(), image)),
            _ => None,
        })
    }

    /// True while any load is in flight.
    pub fn has_pending(&self) -> bool {
        self.entries
            .values()
            .any(|e| matches!(e, ArtEntry::Pending { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn pixel() -> ImageData {
        ImageData {
            width: 1,
            height: 1,
            rgba: vec![255, 0, 0, 255],
        }
    }

    struct StubLoader;

    impl AssetLoader for StubLoader {
        fn load(&self, name: &str) -> Result<ImageData, AssetError> {
            if name == "missing.png" {
                Err(AssetError::Io {
                    name: name.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            } else {
                Ok(pixel())
            }
        }
    }

    #[test]
    fn request_enqueues_once_per_name() {
        let (tx, rx) = unbounded();
        let mut cache = ArtCache::new(tx);
        cache.begin_pass(1);
        assert_eq!(cache.request("board.png"), ArtStatus::Pending);
        assert_eq!(cache.request("board.png"), ArtStatus::Pending);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn current_pass_results_commit() {
        let (tx, _rx) = unbounded();
        let mut cache = ArtCache::new(tx);
        cache.begin_pass(1);
        cache.request("board.png");
        assert!(cache.commit(ArtResult {
            pass: 1,
            name: "board.png".into(),
            image: Ok(pixel()),
        }));
        assert_eq!(cache.request("board.png"), ArtStatus::Ready);
        assert!(cache.get("board.png").is_some());
    }

    #[test]
    fn stale_results_are_dropped_and_rerequested() {
        let (tx, rx) = unbounded();
        let mut cache = ArtCache::new(tx);
        cache.begin_pass(1);
        cache.request("board.png");
        // A newer pass starts and no longer draws the image.
        cache.begin_pass(2);
        assert!(!cache.commit(ArtResult {
            pass: 1,
            name: "board.png".into(),
            image: Ok(pixel()),
        }));
        assert!(cache.get("board.png").is_none());
        // A later pass that wants it again triggers a fresh load.
        cache.begin_pass(3);
        cache.request("board.png");
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn failed_loads_mark_the_entry_failed() {
        let (tx, _rx) = unbounded();
        let mut cache = ArtCache::new(tx);
        cache.begin_pass(1);
        cache.request("missing.png");
        cache.commit(ArtResult {
            pass: 1,
            name: "missing.png".into(),
            image: StubLoader.load("missing.png"),
        });
        assert_eq!(cache.request("missing.png"), ArtStatus::Failed);
        assert!(!cache.has_pending());
    }

    #[test]
    fn loader_worker_round_trips() {
        let (req_tx, req_rx) = unbounded();
        let (res_tx, res_rx) = unbounded();
        let handle = spawn_loader(StubLoader, req_rx, res_tx);
        req_tx
            .send(ArtRequest {
                pass: 1,
                name: "board.png".into(),
            })
            .unwrap();
        let result = res_rx.recv().unwrap();
        assert_eq!(result.name, "board.png");
        assert_eq!(result.image.unwrap(), pixel());
        drop(req_tx);
        handle.join().unwrap();
    }

    #[test]
    fn fs_loader_decodes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([0, 128, 255, 255]),
        ))
        .save(&path)
        .unwrap();

        let loader = FsAssetLoader::new(dir.path());
        let loaded = loader.load("tile.png").unwrap();
        assert_eq!((loaded.width, loaded.height), (2, 2));
        assert!(matches!(
            loader.load("absent.png"),
            Err(AssetError::Io { .. })
        ));
    }
}

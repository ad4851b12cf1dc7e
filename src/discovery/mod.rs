mod controller;
mod engine;

pub use controller::Controller;
pub use engine::{DedupEngine, DiscoveryOutcome, DownloadTagKey, ExistingDownloads};

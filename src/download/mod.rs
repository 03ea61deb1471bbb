//! Download side of the engine: user-facing notices and the simulated
//! progress runs that feed them.

pub mod notify;
pub mod progress;

pub use notify::{Notice, NoticeBoard, NoticeKind, Notifier};
pub use progress::{spawn_progress, DownloadStatus, ProgressConfig, ProgressHandle};

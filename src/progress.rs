// src/progress.rs

//! Download progress reporting
//!
//! The downloader emits a small state machine of events while streaming:
//! `SizeKnown` once the total size is reported by the transport,
//! `BytesTransferred` as data arrives, and a terminal `Completed`. Sinks
//! turn those events into a progress bar, nothing, or a callback.

use indicatif::{ProgressBar, ProgressStyle};

/// Events emitted synchronously during a streaming download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadEvent {
    /// Total size became known; (re)initialize an indicator of this length
    SizeKnown(u64),
    /// Cumulative bytes transferred so far
    BytesTransferred(u64),
    /// Download finished; total bytes transferred
    Completed(u64),
}

/// Receiver for download progress events.
///
/// Injected into the downloader by the caller; the downloader never decides
/// how progress is presented.
pub trait ProgressSink {
    fn handle(&mut self, event: DownloadEvent);
}

/// No-op sink for quiet mode and scripted usage
#[derive(Debug, Default)]
pub struct SilentSink;

impl SilentSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for SilentSink {
    fn handle(&mut self, _event: DownloadEvent) {}
}

/// Visual progress bar sink backed by indicatif.
///
/// `SizeKnown` clears any previous bar and creates a fresh one sized to the
/// total. `BytesTransferred` lazily creates a spinner-style bar if the size
/// was never reported. `Completed` finalizes whatever indicator exists.
#[derive(Default)]
pub struct BarSink {
    bar: Option<ProgressBar>,
}

impl BarSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn sized_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        bar
    }

    fn unsized_bar() -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})")
                .expect("Invalid spinner template"),
        );
        bar
    }
}

impl ProgressSink for BarSink {
    fn handle(&mut self, event: DownloadEvent) {
        match event {
            DownloadEvent::SizeKnown(total) => {
                if let Some(previous) = self.bar.take() {
                    previous.finish_and_clear();
                }
                self.bar = Some(Self::sized_bar(total));
            }
            DownloadEvent::BytesTransferred(count) => {
                let bar = self.bar.get_or_insert_with(Self::unsized_bar);
                bar.set_position(count);
            }
            DownloadEvent::Completed(total) => {
                if let Some(bar) = &self.bar {
                    bar.set_position(total);
                    bar.finish();
                }
            }
        }
    }
}

/// Callback sink for embedding and tests
pub struct CallbackSink<F>
where
    F: FnMut(DownloadEvent),
{
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(DownloadEvent),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ProgressSink for CallbackSink<F>
where
    F: FnMut(DownloadEvent),
{
    fn handle(&mut self, event: DownloadEvent) {
        (self.callback)(event);
    }
}

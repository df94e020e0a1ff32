//! Progress reporting for bulk reindexing; a no-op when the `progress`
//! feature is disabled

/// Progress bar over a fixed number of documents
#[derive(Clone)]
pub struct ReindexProgress {
    #[cfg(feature = "progress")]
    bar: Option<indicatif::ProgressBar>,
}

#[cfg(feature = "progress")]
impl ReindexProgress {
    pub fn new(len: u64, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = indicatif::ProgressBar::new(len);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░  "));
        }
        bar.set_message("Regenerating keywords");
        Self { bar: Some(bar) }
    }

    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&self, message: String) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message);
        }
    }
}

#[cfg(not(feature = "progress"))]
impl ReindexProgress {
    pub fn new(_len: u64, _enabled: bool) -> Self {
        Self {}
    }

    pub fn inc(&self) {}

    pub fn finish(&self, _message: String) {}
}

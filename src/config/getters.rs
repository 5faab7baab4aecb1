//! Getter methods for `ProcessorOptions`

use super::types::{OutputMode, ProcessorOptions};

impl ProcessorOptions {
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    #[must_use]
    pub fn enable(&self) -> &[String] {
        &self.enable
    }

    #[must_use]
    pub fn disable(&self) -> &[String] {
        &self.disable
    }
}

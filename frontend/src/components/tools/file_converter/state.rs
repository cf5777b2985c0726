//! Component state for the universal file converter.

use gloo_file::ObjectUrl;

use crate::lifecycle::Lifecycle;

pub struct FileConverter {
    /// Accepted source file; only set when its extension is convertible.
    pub file: Option<web_sys::File>,

    /// Lowercased extension of the accepted file.
    pub source_ext: Option<String>,

    /// Chosen target format, defaulted to the first valid option when a
    /// file is accepted.
    pub target: Option<String>,

    pub lifecycle: Lifecycle<()>,

    /// Keeps the last download's blob URL alive until the browser has
    /// picked it up; revoked when replaced or on unmount.
    pub last_download: Option<ObjectUrl>,
}

impl FileConverter {
    pub fn new() -> Self {
        FileConverter {
            file: None,
            source_ext: None,
            target: None,
            lifecycle: Lifecycle::idle(),
            last_download: None,
        }
    }
}

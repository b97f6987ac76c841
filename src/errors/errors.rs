use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open source file {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

use {
    snafu::prelude::*,
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed to read `{}`, source: {}", path.display(), source))]
    ReadFile { path: PathBuf, source: io::Error },

    #[snafu(display("Failed to read standard input, source: {}", source))]
    ReadStdin { source: io::Error },

    #[snafu(display("{}", source))]
    Parse {
        #[snafu(backtrace)]
        source: table_parser::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

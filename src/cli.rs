use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::config::{DEFAULT_MAX_CHUNK_LENGTH, DEFAULT_NAMESPACE, EncoderConfig};

/// Embed a file into a C++ header as an escaped string literal.
#[derive(Parser, Debug)]
#[command(version, name = "strlit")]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// File whose bytes are embedded
    pub input: PathBuf,

    /// Header to write; created or truncated
    pub output: PathBuf,

    /// Encoded characters per literal line
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_LENGTH, value_name = "N")]
    pub max_chunk_length: usize,

    /// Write every byte as an octal escape
    #[arg(long)]
    pub always_escape: bool,

    /// Leave out the `const` qualifier on the generated declarations
    #[arg(long)]
    pub mutable: bool,

    /// Namespace around the generated declarations
    #[arg(long, default_value = DEFAULT_NAMESPACE, value_name = "NAME")]
    pub namespace: String,
}

impl Cli {
    pub fn encoder_config(&self) -> EncoderConfig {
        let defaults = EncoderConfig::default();
        EncoderConfig {
            max_chunk_length: self.max_chunk_length,
            always_escape: self.always_escape,
            const_qualifier: if self.mutable {
                String::new()
            } else {
                defaults.const_qualifier
            },
            namespace: self.namespace.clone(),
        }
    }
}

pub fn parse_cli<I, T>(raw_args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(raw_args)
}

/// Help and version requests are not failures.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

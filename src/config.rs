/// Default width of one literal segment, counted in encoded output characters.
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 100;

pub const DEFAULT_CONST_QUALIFIER: &str = "const ";

pub const DEFAULT_NAMESPACE: &str = "CARTASCHEMA";

/// Settings shared by the literal encoder and the header formatter.
///
/// The defaults reproduce the fixed output of the build step this tool
/// replaces, so `EncoderConfig::default()` is what the CLI uses when no
/// flags are given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// A segment is flushed once it holds at least this many characters.
    pub max_chunk_length: usize,
    /// Emit every byte as an octal escape, printable or not.
    pub always_escape: bool,
    /// Prefix for every declaration, `"const "` or empty for mutable output.
    pub const_qualifier: String,
    /// Namespace wrapping the generated declarations.
    pub namespace: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
            always_escape: false,
            const_qualifier: DEFAULT_CONST_QUALIFIER.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

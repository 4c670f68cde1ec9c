//! Generated header layout.
//!
//! ```text
//! #ifndef _<GUARD>
//! #define _<GUARD>
//!
//! namespace <NS> {
//!
//! const unsigned char <ident>_char[] =
//! 	"..."
//! 	"...";
//!
//! const unsigned int <ident>_len = <N>;
//!
//! inline std::string_view <ident>(reinterpret_cast<const char*>(<ident>_char), <ident>_len);
//!
//! } // <NS>
//! #endif // _<GUARD>
//! ```

use std::io::{BufReader, Read, Write};

use anyhow::{Context, Result};

use crate::config::EncoderConfig;
use crate::identifier::Symbol;
use crate::literal::LiteralWriter;

fn write_prologue<W: Write>(out: &mut W, symbol: &Symbol, config: &EncoderConfig) -> Result<()> {
    let guard = symbol.guard_macro();
    write!(
        out,
        "#ifndef {guard}\n#define {guard}\n\nnamespace {} {{\n\n",
        config.namespace
    )
    .context("Failed writing include guard")?;
    write!(
        out,
        "{}unsigned char {}_char[] =\n\t\"",
        config.const_qualifier, symbol.ident
    )
    .context("Failed writing array declaration")?;
    Ok(())
}

fn write_epilogue<W: Write>(out: &mut W, symbol: &Symbol, config: &EncoderConfig, length: u64) -> Result<()> {
    let konst = &config.const_qualifier;
    let ident = &symbol.ident;
    write!(out, "\";\n\n{konst}unsigned int {ident}_len = {length};\n")
        .context("Failed writing length declaration")?;
    write!(
        out,
        "\ninline std::string_view {ident}(reinterpret_cast<{konst}char*>({ident}_char), {ident}_len);\n"
    )
    .context("Failed writing string view")?;
    write!(
        out,
        "\n}} // {}\n#endif // {}\n",
        config.namespace,
        symbol.guard_macro()
    )
    .context("Failed writing footer")?;
    Ok(())
}

/// Read `input` to the end and write the complete header for it to `out`.
///
/// Returns the number of input bytes embedded. Nothing is rolled back on
/// failure; whatever was written before the error stays in `out`.
pub fn write_header<R: Read, W: Write>(
    input: R,
    mut out: W,
    symbol: &Symbol,
    config: &EncoderConfig,
) -> Result<u64> {
    write_prologue(&mut out, symbol, config)?;

    let mut literal = LiteralWriter::new(&mut out, config);
    for byte in BufReader::new(input).bytes() {
        let byte = byte.context("Failed reading input")?;
        literal.push(byte).context("Failed writing literal")?;
    }
    let (out, length) = literal.finish().context("Failed writing literal")?;

    write_epilogue(out, symbol, config, length)?;
    out.flush().context("Failed flushing output")?;
    Ok(length)
}

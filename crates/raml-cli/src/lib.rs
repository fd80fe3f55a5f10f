//! File-level commands behind the `raml` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use raml_codec::{CodecConfig, ContainerInfo, EncodeSummary};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const EXTENSION: &str = "raml";

/// Load a JSON config file (or defaults), then apply the delimiter override.
pub fn load_config(path: Option<&Path>, delimiter: Option<u8>) -> Result<CodecConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<CodecConfig>(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => CodecConfig::default(),
    };
    if let Some(d) = delimiter {
        config.delimiter = d;
    }
    debug!(?config, "loaded codec config");
    Ok(config)
}

/// Parse a delimiter argument: one ASCII char, `\n` `\t` `\r` `\s` `\0`, or `0xNN`.
pub fn parse_delimiter(arg: &str) -> Result<u8> {
    match arg {
        "\\n" => return Ok(b'\n'),
        "\\t" => return Ok(b'\t'),
        "\\r" => return Ok(b'\r'),
        "\\s" => return Ok(b' '),
        "\\0" => return Ok(0),
        _ => {}
    }
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).with_context(|| format!("invalid hex delimiter '{arg}'"));
    }
    match arg.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => bail!("delimiter must be a single ASCII byte, got '{arg}'"),
    }
}

/// `INPUT` -> `INPUT.raml`.
pub fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Write via a temp file in the target directory and rename, so a failure
/// leaves no partial output and no neighbouring file is touched.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let context = || format!("failed to write {}", path.display());
    let mut tmp = NamedTempFile::new_in(dir).with_context(context)?;
    tmp.write_all(data).with_context(context)?;
    tmp.flush().with_context(context)?;
    tmp.as_file().sync_all().with_context(context)?;
    tmp.persist(path).map_err(|e| e.error).with_context(context)?;
    Ok(())
}

pub fn encode_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<EncodeSummary> {
    let text = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let mut buf = Vec::new();
    let summary = raml_codec::encode_to(&text, config, &mut buf)
        .with_context(|| format!("failed to encode {}", input.display()))?;
    write_atomic(output, &buf)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        ratio = summary.ratio(),
        "encoded"
    );
    Ok(summary)
}

/// Decode `input`; write to `output`, or return the text when `output` is `None`.
pub fn decode_file(input: &Path, output: Option<&Path>) -> Result<Vec<u8>> {
    let data = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let text = raml_codec::decode(&data)
        .with_context(|| format!("failed to decode {}", input.display()))?;
    if let Some(output) = output {
        write_atomic(output, &text)?;
        info!(input = %input.display(), output = %output.display(), bytes = text.len(), "decoded");
    }
    Ok(text)
}

pub fn inspect_file(input: &Path) -> Result<ContainerInfo> {
    let data = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    raml_codec::inspect(&data).with_context(|| format!("failed to inspect {}", input.display()))
}

pub fn format_summary(summary: &EncodeSummary) -> String {
    format!(
        "{} -> {} bytes ({:.1}%), {} tokens, {} unique, wml {}",
        summary.original_len,
        summary.encoded_len,
        summary.ratio() * 100.0,
        summary.token_count,
        summary.unique_count,
        summary.wml,
    )
}

/// Header facts followed by the first `words` dictionary entries.
pub fn format_info(info: &ContainerInfo, words: usize) -> String {
    let mut out = format!(
        "wml: {}\ntokens: {}\nunique: {}\ndictionary bytes: {}\nindex bytes: {}\n",
        info.wml, info.token_count, info.unique_count, info.dictionary_bytes, info.index_bytes,
    );
    for (rank, word) in info.words.iter().take(words).enumerate() {
        out.push_str(&format!("{rank:>6}  {:?}\n", String::from_utf8_lossy(word)));
    }
    out
}

/// `info` as pretty JSON, listing only the first `words` dictionary entries.
pub fn format_info_json(info: &ContainerInfo, words: usize) -> Result<String> {
    let mut info = info.clone();
    info.words.truncate(words);
    Ok(serde_json::to_string_pretty(&info)?)
}

#[cfg(test)]
mod tests;

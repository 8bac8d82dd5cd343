//! Corpus loading and token dump output.
//!
//! Corpora are plain text files. Bytes that are not valid UTF-8 are decoded
//! as Latin-1, which maps every byte to a character and never fails.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::Result;

/// Read a corpus file, keeping only the first `max_lines` lines if given.
///
/// # Errors
///
/// Returns [`LexicaError::Io`](crate::error::LexicaError::Io) if the file
/// cannot be read.
pub fn read_corpus<P: AsRef<Path>>(path: P, max_lines: Option<usize>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("{} is not valid UTF-8, decoding as Latin-1", path.display());
            decode_latin1(err.as_bytes())
        }
    };

    let text = match max_lines {
        Some(limit) => text.lines().take(limit).collect::<Vec<_>>().join("\n"),
        None => text,
    };

    info!("loaded {} ({} chars)", path.display(), text.chars().count());
    Ok(text)
}

/// Decode bytes as ISO-8859-1.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Write `tokens` space-separated to `path`, returning how many were written.
pub fn write_tokens<P, I, S>(path: P, tokens: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let mut written = 0;
    for token in tokens {
        if written > 0 {
            writer.write_all(b" ")?;
        }
        writer.write_all(token.as_ref().as_bytes())?;
        written += 1;
    }
    writer.flush()?;

    debug!("wrote {written} tokens to {}", path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;
    use crate::error::LexicaError;

    #[test]
    fn test_read_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "In the beginning\nwas the Word\n").unwrap();

        let text = read_corpus(file.path(), None).unwrap();
        assert_eq!(text, "In the beginning\nwas the Word\n");
    }

    #[test]
    fn test_latin1_fallback() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9 na\xefve").unwrap();

        let text = read_corpus(file.path(), None).unwrap();
        assert_eq!(text, "café naïve");
    }

    #[test]
    fn test_max_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\nthree\nfour\n").unwrap();

        assert_eq!(read_corpus(file.path(), Some(2)).unwrap(), "one\ntwo");
        assert_eq!(read_corpus(file.path(), Some(10)).unwrap(), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_corpus(dir.path().join("missing.txt"), None);
        assert!(matches!(result, Err(LexicaError::Io(_))));
    }

    #[test]
    fn test_write_tokens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.txt");

        let written = write_tokens(&path, ["god", "creat", "heaven"]).unwrap();
        assert_eq!(written, 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "god creat heaven");
    }
}

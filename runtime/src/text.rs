//! UCS-2 text encoding for the firmware console.
//!
//! The Simple Text Output protocol takes NUL-terminated UCS-2 strings and expects `\r\n` line
//! endings. Strings are encoded into a fixed stack buffer and handed out chunk by chunk, so no
//! allocator is needed.

use crate::status::Status;

/// Maximum length of an encoded chunk in code units, terminating NUL included.
pub const CHUNK_LEN: usize = 128;

/// Substituted for characters UCS-2 cannot represent.
const REPLACEMENT: u16 = 0xfffd;

/// Encodes `s` as NUL-terminated UCS-2 chunks of at most [`CHUNK_LEN`] code units and passes
/// each of them to `f`, in order.
///
/// Every `\n` is emitted as `\r\n`, and the pair is never split across two chunks. Characters
/// outside the Basic Multilingual Plane and embedded NULs are replaced with U+FFFD.
///
/// Stops at the first error returned by `f`. An empty string produces no chunks.
pub fn encode<E, F>(s: &str, mut f: F) -> Result<(), E>
where
    F: FnMut(&[u16]) -> Result<(), E>,
{
    let mut buf = [0u16; CHUNK_LEN];
    let mut len = 0;

    for c in s.chars() {
        // Keep room for a CRLF pair and the terminator
        if len + 3 > CHUNK_LEN {
            buf[len] = 0;
            f(&buf[..=len])?;
            len = 0;
        }

        if c == '\n' {
            buf[len] = u16::from(b'\r');
            len += 1;
        }
        buf[len] = to_ucs2(c);
        len += 1;
    }

    if len > 0 {
        buf[len] = 0;
        f(&buf[..=len])?;
    }

    Ok(())
}

/// Writes `s` through `output`, one encoded chunk at a time, as a console driver does.
///
/// A warning from a chunk does not stop the write: the remaining chunks are still output and the
/// last warning is returned as `Err` at the end. An error status stops the write and is returned
/// as is.
pub fn write<F>(s: &str, mut output: F) -> Result<(), Status>
where
    F: FnMut(&[u16]) -> Result<(), Status>,
{
    let mut warning = None;

    encode(s, |chunk| match output(chunk) {
        Err(status) if !status.is_error() => {
            warning = Some(status);
            Ok(())
        }
        res => res,
    })?;

    warning.map_or(Ok(()), Err)
}

fn to_ucs2(c: char) -> u16 {
    match u16::try_from(u32::from(c)) {
        Ok(0) | Err(_) => REPLACEMENT,
        Ok(unit) => unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: &str) -> Vec<Vec<u16>> {
        let mut chunks = Vec::new();
        encode::<(), _>(s, |chunk| {
            chunks.push(chunk.to_vec());
            Ok(())
        })
        .unwrap();
        chunks
    }

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn greeting_uses_crlf() {
        let mut expected = units("Hello, World!\r\n");
        expected.push(0);

        assert_eq!(collect("Hello, World!\n"), vec![expected]);
    }

    #[test]
    fn empty_string_produces_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn unencodable_characters_are_replaced() {
        assert_eq!(collect("a\u{1f980}b\0"), vec![vec![0x61, 0xfffd, 0x62, 0xfffd, 0]]);
        assert_eq!(collect("é"), vec![vec![0xe9, 0]]);
    }

    #[test]
    fn long_strings_are_chunked() {
        let text = "a".repeat(200);
        let chunks = collect(&text);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), CHUNK_LEN - 1);
        assert_eq!(chunks[1].len(), 200 - (CHUNK_LEN - 2) + 1);

        for chunk in &chunks {
            assert!(chunk.len() <= CHUNK_LEN);
            assert_eq!(chunk.last(), Some(&0));
            assert!(!chunk[..chunk.len() - 1].contains(&0));
        }

        let total: usize = chunks.iter().map(|c| c.len() - 1).sum();
        assert_eq!(total, 200);
    }

    #[test]
    fn crlf_is_never_split() {
        // Line feed lands exactly where the first chunk runs out of room
        let text = format!("{}\n", "a".repeat(CHUNK_LEN - 2));
        let chunks = collect(&text);
        assert_eq!(chunks.len(), 2);

        for chunk in &chunks {
            let body = &chunk[..chunk.len() - 1];
            assert_ne!(body.last(), Some(&u16::from(b'\r')));
            assert_ne!(body.first(), Some(&u16::from(b'\n')));
        }

        let joined: Vec<u16> = chunks
            .iter()
            .flat_map(|c| c[..c.len() - 1].iter().copied())
            .collect();
        assert_eq!(joined, units(&text.replace('\n', "\r\n")));
    }

    #[test]
    fn write_all_chunks() {
        let text = "a".repeat(2 * CHUNK_LEN);
        let mut calls = 0;

        let res = write(&text, |_| {
            calls += 1;
            Ok(())
        });

        assert_eq!(res, Ok(()));
        assert_eq!(calls, 3);
    }

    #[test]
    fn write_continues_after_warning() {
        let text = "a".repeat(2 * CHUNK_LEN);
        let mut calls = 0;

        let res = write(&text, |_| {
            calls += 1;
            if calls == 1 {
                Err(Status::WarnUnknownGlyph)
            } else {
                Ok(())
            }
        });

        assert_eq!(res, Err(Status::WarnUnknownGlyph));
        assert_eq!(calls, 3);
    }

    #[test]
    fn write_error_overrides_warning() {
        let text = "a".repeat(3 * CHUNK_LEN);
        let mut calls = 0;

        let res = write(&text, |_| {
            calls += 1;
            match calls {
                1 => Err(Status::WarnUnknownGlyph),
                2 => Err(Status::DeviceError),
                _ => Ok(()),
            }
        });

        assert_eq!(res, Err(Status::DeviceError));
        assert_eq!(calls, 2);
    }

    #[test]
    fn stops_at_first_error() {
        let text = "a".repeat(3 * CHUNK_LEN);
        let mut calls = 0;

        let res = encode(&text, |_| {
            calls += 1;
            Err("console gone")
        });

        assert_eq!(res, Err("console gone"));
        assert_eq!(calls, 1);
    }
}

use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

use crate::FixtureError;

/// Creates `path` for writing, truncating any previous contents.
pub fn create_output(path: impl AsRef<Path>) -> Result<File, FixtureError> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        // Final permissions are decided by the umask.
        options.mode(0o777);
    }

    options
        .open(path)
        .map_err(|source| FixtureError::CreateOutput {
            path: path.to_owned(),
            source,
        })
}

/// Copies exactly `count` bytes from `source` into `output`.
///
/// A source that ends early is an error, the bytes copied so far stay in `output`.
pub fn copy_exact(
    source: impl Read,
    mut output: impl Write,
    count: u64,
) -> Result<u64, FixtureError> {
    let copied =
        io::copy(&mut source.take(count), &mut output).map_err(FixtureError::FailedToCopy)?;

    if copied != count {
        return Err(FixtureError::ShortCopy {
            expected: count,
            copied,
        });
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededStream;
    use std::{fs, io::Cursor};

    #[test]
    pub fn copies_exact_count_from_longer_source() {
        let mut out = Vec::new();
        let copied = copy_exact(SeededStream::new(1), &mut out, 10_000).unwrap();

        assert_eq!(copied, 10_000);
        assert_eq!(out.len(), 10_000);
    }

    #[test]
    pub fn short_source_is_an_error() {
        let mut out = Vec::new();
        let result = copy_exact(Cursor::new(vec![0xaau8; 100]), &mut out, 4096);

        assert!(matches!(
            result,
            Err(FixtureError::ShortCopy {
                expected: 4096,
                copied: 100
            })
        ));
    }

    #[test]
    pub fn write_failure_is_an_error() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "no space left"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = copy_exact(SeededStream::new(1), Full, 16);
        assert!(matches!(result, Err(FixtureError::FailedToCopy(_))));
    }

    #[test]
    pub fn create_output_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.bin");
        fs::write(&path, vec![0x55u8; 8192]).unwrap();

        let file = create_output(&path).unwrap();
        copy_exact(Cursor::new(vec![0x11u8; 64]), file, 64).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0x11u8; 64]);
    }

    #[test]
    pub fn create_output_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("base.bin");

        match create_output(&path) {
            Err(FixtureError::CreateOutput { path: failed, .. }) => assert_eq!(failed, path),
            _ => panic!("expected CreateOutput error"),
        }
    }
}

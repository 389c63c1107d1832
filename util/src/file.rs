use std::fs::File;
use std::io::Read;
use std::os::unix::fs::OpenOptionsExt;
use std::result::Result;
use std::{fs::OpenOptions, path::Path};

use anyhow::ensure;

/// Upper bound for files read through [read_small_file]; keys and cookies are tiny.
pub const MAX_SMALL_FILE_LEN: u64 = 4096;

pub enum Visibility {
    Public,
    Secret,
}

/// Open a file writable
pub fn fopen_w<P: AsRef<Path>>(path: P, visibility: Visibility) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).read(false).truncate(true);
    match visibility {
        Visibility::Public => options.mode(0o644),
        Visibility::Secret => options.mode(0o600),
    };
    options.open(path)
}

/// Open a file readable
pub fn fopen_r<P: AsRef<Path>>(path: P) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(false)
        .create(false)
        .truncate(false)
        .open(path)
}

/// Read the whole file into `buf`, refusing files larger than [MAX_SMALL_FILE_LEN]
pub fn read_small_file<R: Read>(file: R, buf: &mut Vec<u8>) -> anyhow::Result<()> {
    let read = file.take(MAX_SMALL_FILE_LEN + 1).read_to_end(buf)?;
    ensure!(
        read as u64 <= MAX_SMALL_FILE_LEN,
        "File too long! (more than {MAX_SMALL_FILE_LEN} bytes)"
    );
    Ok(())
}

pub trait LoadValueB64 {
    type Error;

    fn load_b64<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

//! Small filesystem helpers built on `cap-std` and `camino`.

use std::io;
use std::time::SystemTime;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return a file's last modification time.
pub(crate) fn modified_time(path: &Utf8Path) -> io::Result<SystemTime> {
    std::fs::metadata(path.as_std_path())?.modified()
}

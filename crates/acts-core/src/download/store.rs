//! Writing downloaded bodies to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path for the temp file: appends `.part` to the final path (e.g. `akt.pdf` → `akt.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Writes `body` to `<path>.part`, then renames it over `path`.
///
/// `path` only ever exists complete; an interrupted write leaves `<path>.part`.
pub fn save(path: &Path, body: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path);
    fs::write(&tmp, body)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Appends `.c` unless the path already ends in it
pub fn with_c_extension(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(".c") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".c");
        PathBuf::from(name)
    }
}

/// Writes the generated code, returning where it actually ended up
pub fn save(path: &Path, code: &str) -> io::Result<PathBuf> {
    let path = with_c_extension(path);
    fs::write(&path, code)?;
    Ok(path)
}

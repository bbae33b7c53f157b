use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered output, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under a directory, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidInputDir(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Where the rendered form of `input` goes.
///
/// The path of `input` relative to `root` is kept under `output_dir`, with the
/// extension replaced: `root/sub/a.md` becomes `output_dir/sub/a.<extension>`.
/// An input outside `root` keeps only its file name.
pub fn output_path_for(input: &Path, root: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let relative = input
        .strip_prefix(root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .unwrap_or_else(|| {
            let name = input.file_name().unwrap_or(input.as_os_str());
            RelativePathBuf::from(name.to_string_lossy().as_ref())
        });

    relative.with_extension(extension).to_path(output_dir)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

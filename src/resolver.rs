use crate::error::OverlayError;
use crate::font::Font;
use std::path::{Path, PathBuf};

/// Best-effort font discovery.
///
/// The resolver scans an injectable list of directories for font files and
/// orders them by a prioritized list of family keywords: the first file
/// whose name matches the highest-priority keyword wins. Files that match
/// no keyword are kept as a last-resort cascade, so resolution only fails
/// on a machine with no usable font files at all. The lookup is advisory—
/// callers that already have font bytes can construct a
/// [`Font`](crate::Font) directly and skip the file system entirely.
pub struct FontResolver {
    search_paths: Vec<PathBuf>,
    keywords: Vec<String>,
}

impl Default for FontResolver {
    fn default() -> FontResolver {
        FontResolver {
            search_paths: default_search_paths(),
            keywords: ["DejaVuSans-Bold", "DejaVuSans", "Arial", "Liberation"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl FontResolver {
    /// Create a resolver with explicit search directories and keyword
    /// priorities, highest priority first
    pub fn new(search_paths: Vec<PathBuf>, keywords: Vec<String>) -> FontResolver {
        FontResolver {
            search_paths,
            keywords,
        }
    }

    /// Find and load the best available font. Individual files that fail
    /// to read or parse are skipped; only an empty cascade is an error.
    pub fn resolve(&self) -> Result<Font, OverlayError> {
        let mut files: Vec<PathBuf> = Vec::new();
        for dir in &self.search_paths {
            collect_font_files(dir, &mut files);
        }

        for path in prioritize(&files, &self.keywords) {
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::debug!("skipping unreadable font {}: {e}", path.display());
                    continue;
                }
            };
            match Font::load(bytes) {
                Ok(font) => {
                    log::debug!(
                        "resolved font {} ({})",
                        path.display(),
                        font.family().unwrap_or_else(|| "unnamed".into()),
                    );
                    return Ok(font);
                }
                Err(e) => {
                    log::debug!("skipping unparseable font {}: {e}", path.display());
                }
            }
        }

        log::warn!("no usable font found in {:?}", self.search_paths);
        Err(OverlayError::NoFontFound(self.search_paths.clone()))
    }
}

/// Order candidate font files by keyword priority: all files matching the
/// first keyword (case-insensitive substring of the file stem), then all
/// files matching the second, and so on, followed by every remaining file
/// as the fallback cascade. Within a keyword, the input order is kept.
fn prioritize<'a>(files: &'a [PathBuf], keywords: &[String]) -> Vec<&'a PathBuf> {
    let stems: Vec<String> = files
        .iter()
        .map(|f| {
            f.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_ascii_lowercase()
        })
        .collect();

    let mut ordered: Vec<&PathBuf> = Vec::with_capacity(files.len());
    let mut taken = vec![false; files.len()];

    for keyword in keywords {
        let keyword = keyword.to_ascii_lowercase();
        for (i, file) in files.iter().enumerate() {
            if !taken[i] && stems[i].contains(&keyword) {
                ordered.push(file);
                taken[i] = true;
            }
        }
    }
    for (i, file) in files.iter().enumerate() {
        if !taken[i] {
            ordered.push(file);
        }
    }

    ordered
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            e == "ttf" || e == "otf"
        })
        .unwrap_or(false)
}

fn collect_font_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_font_files(&path, out);
        } else if is_font_file(&path) {
            out.push(path);
        }
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(&home).join(".fonts"));
        paths.push(PathBuf::from(&home).join(".local/share/fonts"));
    }
    paths
}

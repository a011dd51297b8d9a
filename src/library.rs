//! Library loading - builds the song catalog from a directory
//!
//! Runs once at startup. Tags, duration and embedded cover art are read with
//! lofty; a file whose metadata cannot be read still enters the catalog with
//! defaults (title = file stem, no artist, unknown duration). An unreadable
//! directory yields an empty catalog, logged, never fatal.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use lofty::{Accessor, AudioFile, TaggedFileExt};

use crate::model::Song;

const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac"];

/// Returns the ordered song catalog for `dir` (sorted by path).
pub fn load_songs(dir: &Path) -> Vec<Song> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "songs folder not readable");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    files.sort();

    files.iter().map(|path| load_song(path)).collect()
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_song(path: &Path) -> Song {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut song = Song {
        path: path.to_path_buf(),
        title: stem,
        artist: String::new(),
        cover_art: None,
        duration_secs: 0.0,
    };

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            song.duration_secs = tagged.properties().duration().as_secs_f64();
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(title) = tag.title() {
                    song.title = title.to_string();
                }
                if let Some(artist) = tag.artist() {
                    song.artist = artist.to_string();
                }
                if let Some(picture) = tag.pictures().first() {
                    song.cover_art = Some(picture.data().to_vec());
                }
            }
        }
        Err(e) => {
            // Metadata enrichment is best-effort; the song stays in the
            // catalog with its defaults.
            tracing::warn!(path = %path.display(), error = %e, "could not read tags");
        }
    }

    song
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn missing_directory_yields_empty_catalog() {
        let songs = load_songs(Path::new("/no/such/folder"));
        assert!(songs.is_empty());
    }

    #[test]
    fn unsupported_extensions_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("cover.jpg")).unwrap();

        let songs = load_songs(dir.path());
        assert!(songs.is_empty());
    }

    #[test]
    fn unreadable_metadata_falls_back_to_filename_stem() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("garbage.mp3")).unwrap();
        file.write_all(b"this is not an mp3").unwrap();

        let songs = load_songs(dir.path());
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "garbage");
        assert_eq!(songs[0].artist, "");
        assert_eq!(songs[0].duration_secs, 0.0);
        assert!(songs[0].cover_art.is_none());
    }

    #[test]
    fn catalog_is_ordered_by_path() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("zz.mp3")).unwrap();
        File::create(dir.path().join("aa.flac")).unwrap();
        File::create(dir.path().join("mm.ogg")).unwrap();

        let songs = load_songs(dir.path());
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["aa", "mm", "zz"]);
    }
}

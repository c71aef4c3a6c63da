//! Best-score persistence.
//!
//! One logical record lives on disk: the all-time best score and when it
//! was achieved. The file carries a version magic and a SHA-256 checksum
//! so a damaged record is rejected rather than silently read back wrong.

use crate::constants::SCORE_VERSION_MAGIC;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// The persisted record. The external contract is a single integer; the
/// timestamp tags the run that set it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub best: u32,
    /// Unix timestamp of the run that set this best.
    pub achieved_at: i64,
}

/// Checksummed single-record store for the best score.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store at the platform config location for the game, creating the
    /// directory if needed.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "imp").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            path: config_dir.join("scores.dat"),
        })
    }

    /// Store at an explicit path. Test seam.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest score ever recorded, or 0 if nothing has been saved yet.
    ///
    /// A missing file is the empty store; every other failure (bad magic,
    /// bad checksum, truncation, undecodable record) is an error.
    pub fn load_best(&self) -> io::Result<u32> {
        match self.read_record() {
            Ok(record) => Ok(record.best),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Replace the stored record with `best`, unconditionally. The store
    /// holds exactly one record; only the most recent write survives.
    pub fn save_best(&self, best: u32) -> io::Result<()> {
        let record = ScoreRecord {
            best,
            achieved_at: Utc::now().timestamp(),
        };
        self.write_record(&record)
    }

    /// End-of-run checkpoint: persist `score` iff it beats `current_best`,
    /// returning the best known afterwards. A non-improving run performs
    /// no write at all.
    pub fn update_best(&self, score: u32, current_best: u32) -> io::Result<u32> {
        if score > current_best {
            self.save_best(score)?;
            Ok(score)
        } else {
            Ok(current_best)
        }
    }

    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized record (variable length)
    /// - SHA256 checksum (32 bytes)
    fn write_record(&self, record: &ScoreRecord) -> io::Result<()> {
        let data = bincode::serialize(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(&SCORE_VERSION_MAGIC.to_le_bytes());
        hasher.update(&data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.path)?;
        file.write_all(&SCORE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    fn read_record(&self) -> io::Result<ScoreRecord> {
        let mut file = fs::File::open(&self.path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SCORE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid score file version: expected 0x{:016X}, got 0x{:016X}",
                    SCORE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScoreStore {
        let path = std::env::temp_dir().join(format!(
            "imp-scores-{}-{}.dat",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        ScoreStore::at(path)
    }

    #[test]
    fn test_empty_store_loads_zero() {
        let store = temp_store("empty");
        assert_eq!(store.load_best().expect("load from empty store"), 0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("round-trip");
        store.save_best(42).expect("save");
        assert_eq!(store.load_best().expect("load"), 42);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_overwrites_unconditionally() {
        let store = temp_store("overwrite");
        store.save_best(42).expect("save 42");
        store.save_best(10).expect("save 10");
        // Last write wins, not the maximum.
        assert_eq!(store.load_best().expect("load"), 10);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_update_best_saves_only_improvements() {
        let store = temp_store("update-best");
        assert_eq!(store.update_best(7, 5).expect("improving update"), 7);
        assert_eq!(store.load_best().expect("load"), 7);

        // A non-improving run must not write: remove the file and confirm
        // the store is still empty afterwards.
        fs::remove_file(store.path()).expect("remove");
        assert_eq!(store.update_best(3, 7).expect("losing update"), 7);
        assert_eq!(store.load_best().expect("load"), 0);
    }

    #[test]
    fn test_record_timestamp_is_recent() {
        let store = temp_store("timestamp");
        let before = Utc::now().timestamp();
        store.save_best(1).expect("save");
        let record = store.read_record().expect("read record");
        assert_eq!(record.best, 1);
        assert!(record.achieved_at >= before);
        assert!(record.achieved_at <= Utc::now().timestamp());
        let _ = fs::remove_file(store.path());
    }
}

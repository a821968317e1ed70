//! Durable storage of the rating dataset as a headed CSV file.
//!
//! The whole file is rewritten on every save. Writes go to a sibling
//! `.tmp` file which is then renamed over the target, so readers never
//! observe a partially written dataset. There is no locking: with two
//! writers the last rename wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Criterion;
use crate::error::StorageError;
use crate::record::{Dataset, RatingRecord, Scores};

/// Header row of the persisted file, in column order.
pub const COLUMNS: [&str; 17] = [
    "Country",
    "Club",
    "Position",
    "Name",
    "Agent",
    "Clarity",
    "Speed",
    "Professionalism",
    "Courtesy",
    "Efficiency",
    "ProblemSolving",
    "Reliability",
    "Commitment",
    "Accessibility",
    "Flexibility",
    "Comment",
    "CompositeScore",
];

/// Backend that loads and saves a complete [`Dataset`].
pub trait RecordStore {
    /// Reads the stored dataset. A store with nothing written yet yields an empty dataset.
    fn load(&self) -> Result<Dataset, StorageError>;

    /// Replaces the stored dataset with `dataset`.
    fn save(&self, dataset: &Dataset) -> Result<(), StorageError>;
}

/// [`RecordStore`] backed by a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a header-only file if none exists yet. Returns whether a file was created.
    pub fn init(&self) -> Result<bool, StorageError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Dataset::new())?;
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> StorageError {
        StorageError::Malformed {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl RecordStore for CsvStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Dataset, StorageError> {
        if !self.path.exists() {
            debug!("Dataset file absent, starting empty");
            return Ok(Dataset::new());
        }

        let read_error = |source| StorageError::Read {
            path: self.path.clone(),
            source,
        };

        let mut rdr = csv::Reader::from_path(&self.path).map_err(read_error)?;
        let headers = rdr.headers().map_err(read_error)?;
        if !headers.iter().eq(COLUMNS) {
            return Err(self.malformed(format!(
                "unexpected header row: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut records = Vec::new();
        for (i, result) in rdr.deserialize::<Row>().enumerate() {
            let row = result.map_err(read_error)?;
            let record = row
                .into_record()
                .map_err(|reason| self.malformed(format!("row {}: {reason}", i + 1)))?;
            records.push(record);
        }

        debug!(records = records.len(), "Dataset loaded");
        Ok(Dataset::from_records(records))
    }

    #[tracing::instrument(skip(self, dataset), fields(path = %self.path.display(), records = dataset.len()))]
    fn save(&self, dataset: &Dataset) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let tmp = self.temp_path();
        let result = write_csv(&tmp, dataset).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }

        debug!("Dataset saved");
        Ok(())
    }
}

fn write_csv(path: &Path, dataset: &Dataset) -> io::Result<()> {
    // Header written by hand so an empty dataset still gets one.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for record in dataset {
        writer.serialize(Row::from(record))?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// Loads the dataset, degrading to an empty one if the stored file cannot be read.
pub fn load_dataset(store: &impl RecordStore) -> Dataset {
    match store.load() {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!(error = %e, "Could not load ratings, starting with an empty dataset");
            Dataset::new()
        }
    }
}

/// Writes the full dataset to `store`.
pub fn persist(store: &impl RecordStore, dataset: &Dataset) -> Result<(), StorageError> {
    store.save(dataset)
}

impl Dataset {
    /// Appends `record` and persists the whole dataset.
    ///
    /// If the save fails the append is undone, so memory and disk stay in step.
    pub fn commit(
        &mut self,
        record: RatingRecord,
        store: &impl RecordStore,
    ) -> Result<(), StorageError> {
        self.push(record);
        if let Err(e) = store.save(self) {
            self.pop();
            return Err(e);
        }
        info!(records = self.len(), "Rating stored");
        Ok(())
    }
}

/// One CSV line. Column names come from the PascalCase field names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    country: String,
    club: String,
    position: String,
    name: String,
    agent: String,
    clarity: i64,
    speed: i64,
    professionalism: i64,
    courtesy: i64,
    efficiency: i64,
    problem_solving: i64,
    reliability: i64,
    commitment: i64,
    accessibility: i64,
    flexibility: i64,
    comment: String,
    composite_score: f64,
}

impl From<&RatingRecord> for Row {
    fn from(r: &RatingRecord) -> Self {
        let score = |c: Criterion| i64::from(r.scores.get(c));
        Row {
            country: r.country.clone(),
            club: r.club.clone(),
            position: r.position.clone(),
            name: r.name.clone(),
            agent: r.agent.clone(),
            clarity: score(Criterion::Clarity),
            speed: score(Criterion::Speed),
            professionalism: score(Criterion::Professionalism),
            courtesy: score(Criterion::Courtesy),
            efficiency: score(Criterion::Efficiency),
            problem_solving: score(Criterion::ProblemSolving),
            reliability: score(Criterion::Reliability),
            commitment: score(Criterion::Commitment),
            accessibility: score(Criterion::Accessibility),
            flexibility: score(Criterion::Flexibility),
            comment: r.comment.clone(),
            composite_score: r.composite_score,
        }
    }
}

impl Row {
    fn into_record(self) -> Result<RatingRecord, String> {
        let scores = Scores::new([
            self.clarity,
            self.speed,
            self.professionalism,
            self.courtesy,
            self.efficiency,
            self.problem_solving,
            self.reliability,
            self.commitment,
            self.accessibility,
            self.flexibility,
        ])
        .map_err(|e| e.to_string())?;

        if !self.composite_score.is_finite() {
            return Err(format!("invalid composite score {}", self.composite_score));
        }

        Ok(RatingRecord {
            country: self.country,
            club: self.club,
            position: self.position,
            name: self.name,
            agent: self.agent,
            scores,
            comment: self.comment,
            composite_score: self.composite_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{RatingForm, submit_rating};
    use std::cell::Cell;

    fn record(name: &str, comment: &str, scores: [i64; 10]) -> RatingRecord {
        submit_rating(&RatingForm {
            name: name.into(),
            position: "Scouting".into(),
            country: "Argentina".into(),
            club: "Club, \"Atlético\"".into(),
            scores: Scores::new(scores).unwrap(),
            comment: comment.into(),
        })
        .unwrap()
    }

    struct FailingStore {
        saves: Cell<usize>,
    }

    impl RecordStore for FailingStore {
        fn load(&self) -> Result<Dataset, StorageError> {
            Err(StorageError::Malformed {
                path: PathBuf::from("broken.csv"),
                reason: "test".into(),
            })
        }

        fn save(&self, _dataset: &Dataset) -> Result<(), StorageError> {
            self.saves.set(self.saves.get() + 1);
            Err(StorageError::Write {
                path: PathBuf::from("broken.csv"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("absent.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_empty_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data").join("ratings.csv"));
        assert!(store.init().unwrap());
        assert!(!store.init().unwrap());

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim_end(), COLUMNS.join(","));
        assert!(!dir.path().join("data").join("ratings.csv.tmp").exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("ratings.csv"));

        let mut dataset = Dataset::new();
        dataset.push(record("Ana", "Great\nreally", [5; 10]));
        dataset.push(record("Luis", "ok", [1, 2, 3, 4, 5, 1, 2, 3, 4, 4]));
        dataset.push(record("Eva", "meh", [3, 3, 3, 3, 3, 3, 3, 3, 3, 4]));
        store.save(&dataset).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, dataset);
        assert_eq!(loaded.records()[1].composite_score(), 2.9);
    }

    #[test]
    fn test_load_rejects_wrong_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.csv");
        fs::write(&path, "Pais,Club\nEspaña,Real X\n").unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
        assert!(err.is_read());
    }

    #[test]
    fn test_load_rejects_out_of_range_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.csv");
        let row = "España,Real X,CEO,Ana,Ana,9,5,5,5,5,5,5,5,5,5,Great,5.4";
        fs::write(&path, format!("{}\n{row}\n", COLUMNS.join(","))).unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn test_load_rejects_non_numeric_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.csv");
        let row = "España,Real X,CEO,Ana,Ana,x,5,5,5,5,5,5,5,5,5,Great,5.0";
        fs::write(&path, format!("{}\n{row}\n", COLUMNS.join(","))).unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_load_dataset_degrades_to_empty() {
        let store = FailingStore { saves: Cell::new(0) };
        assert!(load_dataset(&store).is_empty());
    }

    #[test]
    fn test_save_into_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let store = CsvStore::new(blocker.join("ratings.csv"));
        let err = store.save(&Dataset::new()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(!err.is_read());
    }

    #[test]
    fn test_commit_rolls_back_on_write_failure() {
        let store = FailingStore { saves: Cell::new(0) };
        let mut dataset = Dataset::new();

        let err = dataset.commit(record("Ana", "Great", [5; 10]), &store);
        assert!(err.is_err());
        assert_eq!(store.saves.get(), 1);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_commit_persists_full_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("ratings.csv"));
        let mut dataset = load_dataset(&store);

        dataset.commit(record("Ana", "Great", [5; 10]), &store).unwrap();
        dataset.commit(record("Luis", "ok", [2; 10]), &store).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records()[0].name(), "Ana");
        assert_eq!(loaded.records()[1].name(), "Luis");
    }
}

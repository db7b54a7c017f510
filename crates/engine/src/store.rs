//! Thread-safe term store
//!
//! `TermStore` owns the [`TermTable`] behind a single reader-writer lock and
//! keeps the snapshot file in step with it.
//!
//! # Locking
//!
//! - `define` takes the lock shared; concurrent lookups do not block each other.
//! - `add_define` and `remove_define` take it exclusively and write the
//!   snapshot before releasing it, so the file matches memory as soon as a
//!   mutation returns.
//!
//! # Save failures
//!
//! If the snapshot write after a mutation fails, the mutation is undone while
//! the exclusive lock is still held and the `Io` error is returned. Readers
//! never observe the reverted state.

use std::path::Path;

use lexicon_core::{LexiconError, Result, Term, TermTable};
use lexicon_durability::SnapshotFile;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::config::{LoadPolicy, StoreConfig};

/// How the table was populated at open time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot existed; the table starts empty.
    Fresh,
    /// The snapshot was loaded.
    Loaded {
        /// Number of terms read
        terms: usize,
    },
    /// The snapshot could not be loaded and was discarded
    /// (`LoadPolicy::StartEmpty`).
    Recovered {
        /// Why loading failed
        reason: String,
    },
}

/// Concurrent term dictionary with durable persistence.
///
/// Share it between threads with `Arc<TermStore>`.
///
/// ```ignore
/// let store = TermStore::open(&StoreConfig::new(dir))?;
/// store.add_define("Hello", "a greeting")?;
/// assert_eq!(store.define("HELLO")?, "a greeting");
/// ```
#[derive(Debug)]
pub struct TermStore {
    table: RwLock<TermTable>,
    file: SnapshotFile,
    outcome: LoadOutcome,
}

impl TermStore {
    /// Open the store described by `config`, loading its snapshot.
    ///
    /// A missing snapshot is not an error. Any other load failure is returned
    /// under `LoadPolicy::Strict` and swallowed (with a warning) under
    /// `LoadPolicy::StartEmpty`.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let file = SnapshotFile::new(config.path());

        let (table, outcome) = match file.read() {
            Ok(Some(table)) => {
                let terms = table.len();
                (table, LoadOutcome::Loaded { terms })
            }
            Ok(None) => (TermTable::new(), LoadOutcome::Fresh),
            Err(e) => match config.load_policy {
                LoadPolicy::Strict => {
                    warn!(path = ?file.path(), error = %e, "Failed to load dictionary");
                    return Err(e);
                }
                LoadPolicy::StartEmpty => {
                    warn!(path = ?file.path(), error = %e, "Discarding unreadable dictionary, starting empty");
                    (
                        TermTable::new(),
                        LoadOutcome::Recovered {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        info!(path = ?file.path(), outcome = ?outcome, "Opened term store");
        Ok(Self {
            table: RwLock::new(table),
            file,
            outcome,
        })
    }

    /// Open the snapshot at `path` with `LoadPolicy::Strict`.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = StoreConfig {
            data_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            load_policy: LoadPolicy::Strict,
        };
        Self::open(&config)
    }

    /// Look up the definition of `term` (case-insensitive).
    ///
    /// Fails with `NotFound` if the term is not defined.
    pub fn define(&self, term: &str) -> Result<String> {
        let term = Term::new(term)?;
        let table = self.table.read();
        match table.lookup(&term) {
            Some(definition) => Ok(definition.to_string()),
            None => {
                debug!(term = %term, "Term not defined");
                Err(LexiconError::not_found(term.into_string()))
            }
        }
    }

    /// Define a new term and persist the table.
    ///
    /// Fails with `AlreadyExists` if the term is defined, leaving the table
    /// unchanged. A failed save reverts the insertion and returns `Io`.
    pub fn add_define(&self, term: &str, definition: &str) -> Result<()> {
        let term = Term::new(term)?;
        if definition.trim().is_empty() {
            return Err(LexiconError::invalid_input("definition must not be empty"));
        }

        let mut table = self.table.write();
        if let Err(e) = table.insert(term.clone(), definition.to_string()) {
            debug!(term = %term, "Term already defined");
            return Err(e);
        }

        if let Err(e) = self.file.write(&table) {
            error!(term = %term, error = %e, "Failed to save dictionary, reverting add");
            let _ = table.erase(&term);
            return Err(e);
        }

        debug!(term = %term, entries = table.len(), "Term defined");
        Ok(())
    }

    /// Remove a term and persist the table.
    ///
    /// Fails with `NotFound` if the term is not defined. A failed save
    /// restores the definition and returns `Io`.
    pub fn remove_define(&self, term: &str) -> Result<()> {
        let term = Term::new(term)?;

        let mut table = self.table.write();
        let previous = match table.erase(&term) {
            Ok(previous) => previous,
            Err(e) => {
                debug!(term = %term, "Term not defined");
                return Err(e);
            }
        };

        if let Err(e) = self.file.write(&table) {
            error!(term = %term, error = %e, "Failed to save dictionary, reverting remove");
            let _ = table.insert(term, previous);
            return Err(e);
        }

        debug!(term = %term, entries = table.len(), "Term removed");
        Ok(())
    }

    /// Number of defined terms
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Whether no terms are defined
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// A consistent copy of the whole table.
    pub fn snapshot(&self) -> TermTable {
        self.table.read().clone()
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// How the table was populated when the store was opened.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }
}

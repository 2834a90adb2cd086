//! Tabulated Reflectance Data

use pbr::reflection::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

lazy_static! {
    /// Caches MERL tables by file path.
    static ref MERL_TABLES: Mutex<HashMap<String, Arc<MerlTable>>> = Mutex::new(HashMap::new());

    /// Caches Fourier BSDF tables by file path.
    static ref FOURIER_TABLES: Mutex<HashMap<String, Arc<FourierBSDFTable>>> =
        Mutex::new(HashMap::new());
}

/// Reflectance data that is loaded from a file and shared between every lobe
/// referencing the same path.
pub trait TableData: Sized + Send + Sync + 'static {
    /// Reads the data from a file.
    ///
    /// * `path` - The file path.
    fn load(path: &str) -> TableResult<Self>;

    /// Returns the process wide cache for this kind of table.
    fn cache() -> &'static Mutex<HashMap<String, Arc<Self>>>;
}

impl TableData for MerlTable {
    fn load(path: &str) -> TableResult<Self> {
        MerlTable::from_file(path)
    }

    fn cache() -> &'static Mutex<HashMap<String, Arc<Self>>> {
        &MERL_TABLES
    }
}

impl TableData for FourierBSDFTable {
    fn load(path: &str) -> TableResult<Self> {
        FourierBSDFTable::from_file(path)
    }

    fn cache() -> &'static Mutex<HashMap<String, Arc<Self>>> {
        &FOURIER_TABLES
    }
}

/// Load state of tabulated data. It moves out of `Unloaded` at most once.
#[derive(Clone, Debug, PartialEq)]
pub enum TableState<T> {
    Unloaded,
    Loaded(Arc<T>),
    Failed,
}

/// Tabulated data referenced by file path and loaded lazily.
#[derive(Clone, Debug, PartialEq)]
pub struct TabulatedTable<T> {
    /// Path to the data file.
    path: String,

    /// Load state.
    state: TableState<T>,
}

impl<T: TableData> TabulatedTable<T> {
    /// Create a new unloaded table reference.
    ///
    /// * `path` - Path to the data file.
    pub fn new(path: &str) -> Self {
        Self {
            path: String::from(path),
            state: TableState::Unloaded,
        }
    }

    /// Returns the path to the data file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the load state.
    pub fn state(&self) -> &TableState<T> {
        &self.state
    }

    /// Returns the table if it has been loaded.
    pub fn table(&self) -> Option<Arc<T>> {
        match &self.state {
            TableState::Loaded(table) => Some(Arc::clone(table)),
            _ => None,
        }
    }

    /// Loads the data unless a previous attempt already happened. A failure is
    /// logged and leaves the table in the `Failed` state.
    pub fn post_process(&mut self) {
        if !matches!(self.state, TableState::Unloaded) {
            return;
        }

        self.state = match load_cached::<T>(&self.path) {
            Ok(table) => TableState::Loaded(table),
            Err(err) => {
                error!("Unable to load {}. {}.", self.path, err);
                TableState::Failed
            }
        };
    }
}

/// Returns the cached table for `path`, reading the file on first use.
///
/// * `path` - Path to the data file.
fn load_cached<T: TableData>(path: &str) -> TableResult<Arc<T>> {
    let mut tables = T::cache().lock().unwrap_or_else(|e| e.into_inner());
    if let Some(table) = tables.get(path) {
        debug!("Using cached table {}", path);
        return Ok(Arc::clone(table));
    }

    let table = Arc::new(T::load(path)?);
    info!("Loaded {}", path);
    tables.insert(String::from(path), Arc::clone(&table));
    Ok(table)
}

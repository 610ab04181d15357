//! Seed file loading
//!
//! Optionally populates the store at startup from a JSON file exported by
//! the upstream data pipeline. The file holds the three record tables; any
//! table may be omitted.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use super::{RecordStore, StoreCounts, StoreError};
use crate::records::{Admission, Appointment, StaffMember};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeedData {
    pub admissions: Vec<Admission>,
    pub appointments: Vec<Appointment>,
    pub staff: Vec<StaffMember>,
}

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Store(StoreError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(err) => write!(f, "Failed to read seed file: {}", err),
            SeedError::Parse(err) => write!(f, "Failed to parse seed file: {}", err),
            SeedError::Store(err) => write!(f, "Failed to load seed records: {}", err),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::Io(err)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::Parse(err)
    }
}

impl From<StoreError> for SeedError {
    fn from(err: StoreError) -> Self {
        SeedError::Store(err)
    }
}

/// Read a seed file and insert its records into the store
pub fn load_into(path: &Path, store: &RecordStore) -> Result<StoreCounts, SeedError> {
    let content = fs::read_to_string(path)?;
    let seed: SeedData = serde_json::from_str(&content)?;

    store.add_admissions(seed.admissions)?;
    store.add_appointments(seed.appointments)?;
    store.add_staff_members(seed.staff)?;

    Ok(store.counts())
}

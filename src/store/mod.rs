//! In-memory record store
//!
//! Holds the operational record tables behind read/write locks so the API
//! layer can keep ingesting records while the analytics endpoints take
//! consistent snapshots.

pub mod seed;

use std::collections::HashSet;
use std::fmt;
use std::sync::RwLock;

use serde::{Serialize, Deserialize};

use crate::records::{Admission, Appointment, StaffMember};

#[derive(Debug)]
pub enum StoreError {
    DuplicateId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "Duplicate record id: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Row counts per table, used by the ingest endpoints to confirm writes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreCounts {
    pub admissions: usize,
    pub appointments: usize,
    pub staff: usize,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    admissions: RwLock<Vec<Admission>>,
    appointments: RwLock<Vec<Appointment>>,
    staff: RwLock<Vec<StaffMember>>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    pub fn add_admission(&self, admission: Admission) -> Result<(), StoreError> {
        let mut admissions = self.admissions.write().unwrap();
        if admissions.iter().any(|a| a.admission_id == admission.admission_id) {
            return Err(StoreError::DuplicateId(admission.admission_id));
        }
        admissions.push(admission);
        Ok(())
    }

    pub fn add_appointment(&self, appointment: Appointment) -> Result<(), StoreError> {
        let mut appointments = self.appointments.write().unwrap();
        if appointments.iter().any(|a| a.appointment_id == appointment.appointment_id) {
            return Err(StoreError::DuplicateId(appointment.appointment_id));
        }
        appointments.push(appointment);
        Ok(())
    }

    pub fn add_staff(&self, member: StaffMember) -> Result<(), StoreError> {
        let mut staff = self.staff.write().unwrap();
        if staff.iter().any(|s| s.staff_id == member.staff_id) {
            return Err(StoreError::DuplicateId(member.staff_id));
        }
        staff.push(member);
        Ok(())
    }

    /// Insert a batch of admissions, stopping at the first duplicate
    pub fn add_admissions(&self, batch: Vec<Admission>) -> Result<usize, StoreError> {
        let mut inserted = 0;
        for admission in batch {
            self.add_admission(admission)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub fn add_appointments(&self, batch: Vec<Appointment>) -> Result<usize, StoreError> {
        let mut inserted = 0;
        for appointment in batch {
            self.add_appointment(appointment)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub fn add_staff_members(&self, batch: Vec<StaffMember>) -> Result<usize, StoreError> {
        let mut inserted = 0;
        for member in batch {
            self.add_staff(member)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Snapshot of the admissions table
    pub fn admissions(&self) -> Vec<Admission> {
        self.admissions.read().unwrap().clone()
    }

    /// Snapshot of the appointments table
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.read().unwrap().clone()
    }

    /// Snapshot of the staff roster
    pub fn staff(&self) -> Vec<StaffMember> {
        self.staff.read().unwrap().clone()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            admissions: self.admissions.read().unwrap().len(),
            appointments: self.appointments.read().unwrap().len(),
            staff: self.staff.read().unwrap().len(),
        }
    }

    /// Distinct patients observed across admissions and appointments
    pub fn distinct_patients(&self) -> usize {
        let mut patients: HashSet<String> = HashSet::new();
        for admission in self.admissions.read().unwrap().iter() {
            patients.insert(admission.patient_id.clone());
        }
        for appointment in self.appointments.read().unwrap().iter() {
            patients.insert(appointment.patient_id.clone());
        }
        patients.len()
    }
}

//! Record Store: the persistence boundary handed to request handlers.
//!
//! One trait per entity so callers can depend on just the slice they
//! use (the care intake only needs `HealthStore + AlertStore`).
//! `RecordStore` is the union, shared as `Arc<dyn RecordStore>`.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use super::repository as repo;
use super::sqlite;
use super::DatabaseError;
use crate::models::{
    Alert, Donation, FacilitySummary, HealthRecord, NewAlert, NewDonation, NewHealthRecord,
    NewResident, NewStaff, Resident, Staff, StaffProfile,
};

pub trait ResidentStore {
    fn list_residents(&self) -> Result<Vec<Resident>, DatabaseError>;
    fn get_resident(&self, id: i64) -> Result<Option<Resident>, DatabaseError>;
    fn create_resident(&self, resident: &NewResident) -> Result<Resident, DatabaseError>;
    fn update_resident(&self, id: i64, resident: &NewResident) -> Result<Resident, DatabaseError>;
    fn delete_resident(&self, id: i64) -> Result<Resident, DatabaseError>;
}

pub trait StaffStore {
    fn list_staff(&self) -> Result<Vec<Staff>, DatabaseError>;
    fn get_staff(&self, id: i64) -> Result<Option<Staff>, DatabaseError>;
    fn create_staff(&self, staff: &NewStaff) -> Result<Staff, DatabaseError>;
    fn update_staff(&self, id: i64, profile: &StaffProfile) -> Result<Staff, DatabaseError>;
    fn delete_staff(&self, id: i64) -> Result<Staff, DatabaseError>;
}

pub trait DonationStore {
    fn list_donations(&self) -> Result<Vec<Donation>, DatabaseError>;
    fn get_donation(&self, id: i64) -> Result<Option<Donation>, DatabaseError>;
    fn create_donation(&self, donation: &NewDonation) -> Result<Donation, DatabaseError>;
    fn update_donation(&self, id: i64, donation: &NewDonation) -> Result<Donation, DatabaseError>;
    fn delete_donation(&self, id: i64) -> Result<Donation, DatabaseError>;
}

pub trait HealthStore {
    fn list_health_records(&self) -> Result<Vec<HealthRecord>, DatabaseError>;
    fn get_health_record(&self, id: i64) -> Result<Option<HealthRecord>, DatabaseError>;
    fn create_health_record(&self, record: &NewHealthRecord)
        -> Result<HealthRecord, DatabaseError>;
    fn update_health_record(
        &self,
        id: i64,
        record: &NewHealthRecord,
    ) -> Result<HealthRecord, DatabaseError>;
    fn delete_health_record(&self, id: i64) -> Result<HealthRecord, DatabaseError>;
}

pub trait AlertStore {
    fn list_alerts(&self) -> Result<Vec<Alert>, DatabaseError>;
    fn get_alert(&self, id: i64) -> Result<Option<Alert>, DatabaseError>;
    fn create_alert(&self, alert: &NewAlert) -> Result<Alert, DatabaseError>;
}

pub trait SummaryStore {
    fn facility_summary(&self) -> Result<FacilitySummary, DatabaseError>;
}

/// Every entity the service persists.
pub trait RecordStore:
    ResidentStore + StaffStore + DonationStore + HealthStore + AlertStore + SummaryStore + Send + Sync
{
}

impl<T> RecordStore for T where
    T: ResidentStore
        + StaffStore
        + DonationStore
        + HealthStore
        + AlertStore
        + SummaryStore
        + Send
        + Sync
{
}

/// SQLite-backed store. One connection, serialized behind a mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating and migrating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Self::initialized(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::initialized(Connection::open_in_memory()?)
    }

    fn initialized(conn: Connection) -> Result<Self, DatabaseError> {
        sqlite::initialize(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap a connection as-is. The caller is responsible for its schema.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        f(&conn)
    }
}

impl ResidentStore for SqliteStore {
    fn list_residents(&self) -> Result<Vec<Resident>, DatabaseError> {
        self.with_conn(repo::list_residents)
    }

    fn get_resident(&self, id: i64) -> Result<Option<Resident>, DatabaseError> {
        self.with_conn(|c| repo::get_resident(c, id))
    }

    fn create_resident(&self, resident: &NewResident) -> Result<Resident, DatabaseError> {
        self.with_conn(|c| repo::insert_resident(c, resident))
    }

    fn update_resident(&self, id: i64, resident: &NewResident) -> Result<Resident, DatabaseError> {
        self.with_conn(|c| repo::update_resident(c, id, resident))
    }

    fn delete_resident(&self, id: i64) -> Result<Resident, DatabaseError> {
        self.with_conn(|c| repo::delete_resident(c, id))
    }
}

impl StaffStore for SqliteStore {
    fn list_staff(&self) -> Result<Vec<Staff>, DatabaseError> {
        self.with_conn(repo::list_staff)
    }

    fn get_staff(&self, id: i64) -> Result<Option<Staff>, DatabaseError> {
        self.with_conn(|c| repo::get_staff(c, id))
    }

    fn create_staff(&self, staff: &NewStaff) -> Result<Staff, DatabaseError> {
        self.with_conn(|c| repo::insert_staff(c, staff))
    }

    fn update_staff(&self, id: i64, profile: &StaffProfile) -> Result<Staff, DatabaseError> {
        self.with_conn(|c| repo::update_staff(c, id, profile))
    }

    fn delete_staff(&self, id: i64) -> Result<Staff, DatabaseError> {
        self.with_conn(|c| repo::delete_staff(c, id))
    }
}

impl DonationStore for SqliteStore {
    fn list_donations(&self) -> Result<Vec<Donation>, DatabaseError> {
        self.with_conn(repo::list_donations)
    }

    fn get_donation(&self, id: i64) -> Result<Option<Donation>, DatabaseError> {
        self.with_conn(|c| repo::get_donation(c, id))
    }

    fn create_donation(&self, donation: &NewDonation) -> Result<Donation, DatabaseError> {
        self.with_conn(|c| repo::insert_donation(c, donation))
    }

    fn update_donation(&self, id: i64, donation: &NewDonation) -> Result<Donation, DatabaseError> {
        self.with_conn(|c| repo::update_donation(c, id, donation))
    }

    fn delete_donation(&self, id: i64) -> Result<Donation, DatabaseError> {
        self.with_conn(|c| repo::delete_donation(c, id))
    }
}

impl HealthStore for SqliteStore {
    fn list_health_records(&self) -> Result<Vec<HealthRecord>, DatabaseError> {
        self.with_conn(repo::list_health_records)
    }

    fn get_health_record(&self, id: i64) -> Result<Option<HealthRecord>, DatabaseError> {
        self.with_conn(|c| repo::get_health_record(c, id))
    }

    fn create_health_record(
        &self,
        record: &NewHealthRecord,
    ) -> Result<HealthRecord, DatabaseError> {
        self.with_conn(|c| repo::insert_health_record(c, record))
    }

    fn update_health_record(
        &self,
        id: i64,
        record: &NewHealthRecord,
    ) -> Result<HealthRecord, DatabaseError> {
        self.with_conn(|c| repo::update_health_record(c, id, record))
    }

    fn delete_health_record(&self, id: i64) -> Result<HealthRecord, DatabaseError> {
        self.with_conn(|c| repo::delete_health_record(c, id))
    }
}

impl AlertStore for SqliteStore {
    fn list_alerts(&self) -> Result<Vec<Alert>, DatabaseError> {
        self.with_conn(repo::list_alerts)
    }

    fn get_alert(&self, id: i64) -> Result<Option<Alert>, DatabaseError> {
        self.with_conn(|c| repo::get_alert(c, id))
    }

    fn create_alert(&self, alert: &NewAlert) -> Result<Alert, DatabaseError> {
        self.with_conn(|c| repo::insert_alert(c, alert))
    }
}

impl SummaryStore for SqliteStore {
    fn facility_summary(&self) -> Result<FacilitySummary, DatabaseError> {
        self.with_conn(repo::facility_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::models::AlertLevel;

    #[test]
    fn store_is_usable_as_trait_object() {
        let store: Arc<dyn RecordStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
        store
            .create_alert(&NewAlert {
                title: "Health Warning".into(),
                description: "x".into(),
                level: AlertLevel::Warning,
            })
            .unwrap();
        assert_eq!(store.list_alerts().unwrap().len(), 1);
        assert_eq!(store.facility_summary().unwrap().alerts.warning, 1);
    }

    #[test]
    fn store_shared_across_threads() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .create_donation(&NewDonation {
                            donor_name: format!("donor {i}"),
                            amount: 5.0,
                            purpose: None,
                        })
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.list_donations().unwrap().len(), 4);
    }

    #[test]
    fn on_disk_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("care.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            assert!(store.list_residents().unwrap().is_empty());
            store
                .create_donation(&NewDonation {
                    donor_name: "Rotary Club".into(),
                    amount: 40.0,
                    purpose: None,
                })
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.list_donations().unwrap().len(), 1);
        let version = store.with_conn(sqlite::schema_version).unwrap();
        assert_eq!(version, 1);
    }
}

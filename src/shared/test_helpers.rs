//! In-memory stores and fixtures for unit and HTTP tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use fake::faker::address::en::CityName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use crate::core::error::Result;
use crate::core::router::api_routes;
use crate::features::donors::dtos::CreateDonorDto;
use crate::features::donors::models::{BloodGroup, Donor, NewDonor};
use crate::features::donors::repositories::{DonorFilter, DonorOrdering, DonorRepository};
use crate::features::donors::DonorService;
use crate::features::locations::models::{Division, Upazila, Zila};
use crate::features::locations::repositories::LocationRepository;
use crate::features::locations::LocationService;

// ==================== Locations ====================

/// Location store holding the same hierarchy the seed migration inserts
pub struct InMemoryLocationRepository {
    divisions: Vec<Division>,
    zilas: Vec<Zila>,
    upazilas: Vec<Upazila>,
}

impl InMemoryLocationRepository {
    pub fn seeded() -> Self {
        let divisions = [
            "Dhaka",
            "Chittagong",
            "Rajshahi",
            "Khulna",
            "Barisal",
            "Sylhet",
            "Rangpur",
            "Mymensingh",
        ];
        let zilas = [
            (1, "Dhaka"),
            (1, "Faridpur"),
            (1, "Gazipur"),
            (1, "Gopalganj"),
            (1, "Kishoreganj"),
            (2, "Chittagong"),
            (2, "Bandarban"),
            (2, "Brahmanbaria"),
            (2, "Chandpur"),
            (2, "Comilla"),
        ];
        let upazilas = [
            (1, "Dhanmondi"),
            (1, "Gulshan"),
            (1, "Ramna"),
            (1, "Tejgaon"),
            (1, "Pallabi"),
            (3, "Gazipur Sadar"),
            (3, "Kaliakair"),
            (3, "Kapasia"),
            (3, "Sreepur"),
            (3, "Kaliganj"),
        ];

        Self {
            divisions: (1..)
                .zip(divisions)
                .map(|(id, name)| Division {
                    id,
                    name: name.to_string(),
                })
                .collect(),
            zilas: (1..)
                .zip(zilas)
                .map(|(id, (division_id, name))| Zila {
                    id,
                    division_id,
                    name: name.to_string(),
                })
                .collect(),
            upazilas: (1..)
                .zip(upazilas)
                .map(|(id, (zila_id, name))| Upazila {
                    id,
                    zila_id,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn list_divisions(&self) -> Result<Vec<Division>> {
        Ok(self.divisions.clone())
    }

    async fn find_division(&self, id: i32) -> Result<Option<Division>> {
        Ok(self.divisions.iter().find(|d| d.id == id).cloned())
    }

    async fn list_zilas(&self, division_id: i32) -> Result<Vec<Zila>> {
        Ok(self
            .zilas
            .iter()
            .filter(|z| z.division_id == division_id)
            .cloned()
            .collect())
    }

    async fn find_zila(&self, id: i32) -> Result<Option<Zila>> {
        Ok(self.zilas.iter().find(|z| z.id == id).cloned())
    }

    async fn list_upazilas(&self, zila_id: i32) -> Result<Vec<Upazila>> {
        Ok(self
            .upazilas
            .iter()
            .filter(|u| u.zila_id == zila_id)
            .cloned()
            .collect())
    }

    async fn find_upazila(&self, id: i32) -> Result<Option<Upazila>> {
        Ok(self.upazilas.iter().find(|u| u.id == id).cloned())
    }
}

// ==================== Donors ====================

#[derive(Default)]
struct DonorTable {
    rows: Vec<Donor>,
    next_id: i32,
    clock: Option<DateTime<Utc>>,
    today: Option<NaiveDate>,
}

impl DonorTable {
    /// Strictly increasing timestamps so update ordering is deterministic
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.clock {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.clock = Some(next);
        next
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Donor store backed by a vector, evaluating filters in process
#[derive(Default)]
pub struct InMemoryDonorRepository {
    table: Mutex<DonorTable>,
}

impl InMemoryDonorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    /// Pin the store date instead of following the UTC clock
    pub fn set_today(&self, today: NaiveDate) {
        self.table.lock().unwrap().today = Some(today);
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn search(&self, filter: &DonorFilter, ordering: DonorOrdering) -> Result<Vec<Donor>> {
        let table = self.table.lock().unwrap();
        let today = table.today();

        let mut donors: Vec<Donor> = table
            .rows
            .iter()
            .filter(|d| filter.matches(d, today))
            .cloned()
            .collect();
        donors.sort_by(|a, b| ordering.compare(a, b));
        Ok(donors)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Donor>> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|d| d.id == id).cloned())
    }

    async fn insert(&self, donor: &NewDonor) -> Result<i32> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        let now = table.tick();

        table.rows.push(Donor {
            id,
            first_name: donor.first_name.clone(),
            last_name: donor.last_name.clone(),
            blood_group: donor.blood_group,
            division_id: donor.division_id,
            zila_id: donor.zila_id,
            upazila_id: donor.upazila_id,
            village: donor.village.clone(),
            current_location: donor.current_location.clone(),
            last_donation_date: donor.last_donation_date,
            phone_number: donor.phone_number.clone(),
            is_available: donor.is_available,
            notes: donor.notes.clone(),
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    async fn update_availability(&self, id: i32, is_available: bool) -> Result<Option<Donor>> {
        let mut table = self.table.lock().unwrap();
        let now = table.tick();

        Ok(table.rows.iter_mut().find(|d| d.id == id).map(|donor| {
            donor.is_available = is_available;
            donor.updated_at = now;
            donor.clone()
        }))
    }

    async fn today(&self) -> Result<NaiveDate> {
        Ok(self.table.lock().unwrap().today())
    }
}

// ==================== Fixtures ====================

/// A complete, valid registration for Ahmed Rahman (O+, Dhaka / Dhaka / Dhanmondi)
pub fn create_donor_dto() -> CreateDonorDto {
    CreateDonorDto {
        first_name: Some("Ahmed".to_string()),
        last_name: Some("Rahman".to_string()),
        blood_group: Some("O+".to_string()),
        division_id: Some(1),
        zila_id: Some(1),
        upazila_id: Some(1),
        village: Some("Dhanmondi".to_string()),
        current_location: Some("Dhaka, Bangladesh".to_string()),
        last_donation_date: Some("2024-01-15".to_string()),
        phone_number: Some("01712345678".to_string()),
        is_available: Some(true),
        notes: None,
        consent: Some(serde_json::Value::Bool(true)),
    }
}

/// A random donor at `(division, zila, upazila)` who last donated `days_ago` days ago
pub fn new_donor(
    blood_group: BloodGroup,
    (division_id, zila_id, upazila_id): (i32, i32, i32),
    is_available: bool,
    days_ago: i64,
) -> NewDonor {
    NewDonor {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        blood_group,
        division_id,
        zila_id,
        upazila_id,
        village: None,
        current_location: CityName().fake(),
        last_donation_date: Utc::now().date_naive() - Duration::days(days_ago),
        phone_number: format!("017{:08}", (0..100_000_000u32).fake::<u32>()),
        is_available,
        notes: None,
    }
}

// ==================== HTTP ====================

/// The full API router over in-memory stores
pub struct TestApp {
    pub server: TestServer,
    pub donors: Arc<InMemoryDonorRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let donors = Arc::new(InMemoryDonorRepository::new());
        let locations = Arc::new(LocationService::new(Arc::new(
            InMemoryLocationRepository::seeded(),
        )));
        let donor_service = Arc::new(DonorService::new(donors.clone(), locations.clone()));

        let server = TestServer::new(api_routes(donor_service, locations))
            .expect("Failed to create test server");

        Self { server, donors }
    }

    /// Insert a donor directly, bypassing registration checks
    pub async fn seed(&self, donor: NewDonor) -> i32 {
        self.donors.insert(&donor).await.unwrap()
    }
}

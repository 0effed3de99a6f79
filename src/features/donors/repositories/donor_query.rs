use sqlx::{Postgres, QueryBuilder};

use crate::features::donors::models::BloodGroup;

/// Column projection shared by every donor read
pub const DONOR_COLUMNS: &str = "id, first_name, last_name, blood_group, division_id, zila_id, \
     upazila_id, village, current_location, last_donation_date, phone_number, is_available, \
     notes, created_at, updated_at";

/// Optional, independent donor search criteria.
///
/// Every present field narrows the result by AND; absent fields impose no
/// constraint, so criteria commute. Values are only ever bound as query
/// parameters, never spliced into the SQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilter {
    pub blood_group: Option<BloodGroup>,
    pub division_id: Option<i32>,
    pub zila_id: Option<i32>,
    pub upazila_id: Option<i32>,
    pub available: Option<bool>,
    /// Last donation no more than this many days before the store's current
    /// date. `Some(0)` means "today", `None` means no date restriction.
    pub last_donation_within: Option<i32>,
}

/// Named result ordering for donor listings.
///
/// `RecentlyUpdated` is the only policy today; new sort keys get a new
/// variant instead of changing this one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DonorOrdering {
    /// Most recently modified donor first, newest id first on equal timestamps
    #[default]
    RecentlyUpdated,
}

impl DonorOrdering {
    pub fn as_sql(&self) -> &'static str {
        match self {
            DonorOrdering::RecentlyUpdated => "updated_at DESC, id DESC",
        }
    }
}

impl DonorFilter {
    pub fn is_empty(&self) -> bool {
        *self == DonorFilter::default()
    }

    /// Append one `AND <column> <op> $n` clause per present criterion
    pub fn push_conditions(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if let Some(blood_group) = self.blood_group {
            builder.push(" AND blood_group = ").push_bind(blood_group);
        }
        if let Some(division_id) = self.division_id {
            builder.push(" AND division_id = ").push_bind(division_id);
        }
        if let Some(zila_id) = self.zila_id {
            builder.push(" AND zila_id = ").push_bind(zila_id);
        }
        if let Some(upazila_id) = self.upazila_id {
            builder.push(" AND upazila_id = ").push_bind(upazila_id);
        }
        if let Some(available) = self.available {
            builder.push(" AND is_available = ").push_bind(available);
        }
        if let Some(days) = self.last_donation_within {
            // Evaluated against the store clock at execution time
            builder
                .push(" AND last_donation_date BETWEEN CURRENT_DATE - ")
                .push_bind(days)
                .push(" AND CURRENT_DATE");
        }
    }

    /// Build the complete donor search statement for this filter
    pub fn search_query(&self, ordering: DonorOrdering) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM donors WHERE 1=1", DONOR_COLUMNS));
        self.push_conditions(&mut builder);
        builder.push(" ORDER BY ").push(ordering.as_sql());
        builder
    }
}

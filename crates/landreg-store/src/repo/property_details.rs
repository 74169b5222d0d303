use crate::errors::Result;
use crate::repo::{ScopedEntity, SqliteRepo, StoredEntity};
use landreg_core::PropertyDetails;
use rusqlite::{Connection, Row};

impl StoredEntity for PropertyDetails {
    const TABLE: &'static str = "property_details";
    const COLUMNS: &'static str =
        "id, land_details_id, survey_number, village, district, state, area_sq_m";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PropertyDetails {
            id: row.get(0)?,
            land_details_id: row.get(1)?,
            survey_number: row.get(2)?,
            village: row.get(3)?,
            district: row.get(4)?,
            state: row.get(5)?,
            area_sq_m: row.get(6)?,
        })
    }
}

impl ScopedEntity for PropertyDetails {}

impl SqliteRepo {
    /// Insert or update a parcel
    pub fn save_property_details(
        conn: &Connection,
        parcel: PropertyDetails,
    ) -> Result<PropertyDetails> {
        let sql = "INSERT INTO property_details (id, land_details_id, survey_number, village,
                 district, state, area_sq_m)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                land_details_id = excluded.land_details_id,
                survey_number = excluded.survey_number,
                village = excluded.village,
                district = excluded.district,
                state = excluded.state,
                area_sq_m = excluded.area_sq_m";

        let id = Self::upsert(
            conn,
            parcel.id,
            sql,
            rusqlite::params![
                parcel.id,
                parcel.land_details_id,
                parcel.survey_number,
                parcel.village,
                parcel.district,
                parcel.state,
                parcel.area_sq_m,
            ],
        )?;

        Ok(PropertyDetails {
            id: Some(id),
            ..parcel
        })
    }
}

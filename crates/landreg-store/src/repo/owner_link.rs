use crate::errors::Result;
use crate::repo::{ScopedEntity, SqliteRepo, StoredEntity};
use landreg_core::LandDetailsLandOwner;
use rusqlite::{Connection, Row};

impl StoredEntity for LandDetailsLandOwner {
    const TABLE: &'static str = "land_details_land_owners";
    const COLUMNS: &'static str = "id, land_details_id, land_owner_id";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LandDetailsLandOwner {
            id: row.get(0)?,
            land_details_id: row.get(1)?,
            land_owner_id: row.get(2)?,
        })
    }
}

impl ScopedEntity for LandDetailsLandOwner {}

impl SqliteRepo {
    /// Insert or update an owner link row
    pub fn save_owner_link(
        conn: &Connection,
        link: LandDetailsLandOwner,
    ) -> Result<LandDetailsLandOwner> {
        let sql = "INSERT INTO land_details_land_owners (id, land_details_id, land_owner_id)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                land_details_id = excluded.land_details_id,
                land_owner_id = excluded.land_owner_id";

        let id = Self::upsert(
            conn,
            link.id,
            sql,
            rusqlite::params![
                link.id,
                link.land_details_id,
                link.land_owner_id,
            ],
        )?;

        Ok(LandDetailsLandOwner {
            id: Some(id),
            ..link
        })
    }
}

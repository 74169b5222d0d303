use crate::errors::Result;
use crate::repo::{SqliteRepo, StoredEntity};
use landreg_core::LandOwner;
use rusqlite::{Connection, Row};

impl StoredEntity for LandOwner {
    const TABLE: &'static str = "land_owners";
    const COLUMNS: &'static str =
        "id, name, guardian_name, phone_number, id_document_number, address";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LandOwner {
            id: row.get(0)?,
            name: row.get(1)?,
            guardian_name: row.get(2)?,
            phone_number: row.get(3)?,
            id_document_number: row.get(4)?,
            address: row.get(5)?,
        })
    }
}

impl SqliteRepo {
    /// Insert or update a land owner
    pub fn save_land_owner(conn: &Connection, owner: LandOwner) -> Result<LandOwner> {
        let sql = "INSERT INTO land_owners (id, name, guardian_name, phone_number,
                 id_document_number, address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                guardian_name = excluded.guardian_name,
                phone_number = excluded.phone_number,
                id_document_number = excluded.id_document_number,
                address = excluded.address";

        let id = Self::upsert(
            conn,
            owner.id,
            sql,
            rusqlite::params![
                owner.id,
                owner.name,
                owner.guardian_name,
                owner.phone_number,
                owner.id_document_number,
                owner.address,
            ],
        )?;

        Ok(LandOwner {
            id: Some(id),
            ..owner
        })
    }
}

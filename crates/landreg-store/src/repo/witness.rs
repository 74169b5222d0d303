use crate::errors::Result;
use crate::repo::{ScopedEntity, SqliteRepo, StoredEntity};
use landreg_core::Witness;
use rusqlite::{Connection, Row};

impl StoredEntity for Witness {
    const TABLE: &'static str = "witnesses";
    const COLUMNS: &'static str = "id, land_details_id, name, phone_number, address";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Witness {
            id: row.get(0)?,
            land_details_id: row.get(1)?,
            name: row.get(2)?,
            phone_number: row.get(3)?,
            address: row.get(4)?,
        })
    }
}

impl ScopedEntity for Witness {}

impl SqliteRepo {
    /// Insert or update a witness
    pub fn save_witness(conn: &Connection, witness: Witness) -> Result<Witness> {
        let sql = "INSERT INTO witnesses (id, land_details_id, name, phone_number, address)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                land_details_id = excluded.land_details_id,
                name = excluded.name,
                phone_number = excluded.phone_number,
                address = excluded.address";

        let id = Self::upsert(
            conn,
            witness.id,
            sql,
            rusqlite::params![
                witness.id,
                witness.land_details_id,
                witness.name,
                witness.phone_number,
                witness.address,
            ],
        )?;

        Ok(Witness {
            id: Some(id),
            ..witness
        })
    }
}

use crate::errors::Result;
use crate::repo::{SqliteRepo, StoredEntity};
use landreg_core::LandDetails;
use rusqlite::{Connection, Row};

impl StoredEntity for LandDetails {
    const TABLE: &'static str = "land_details";
    const COLUMNS: &'static str = "id, account_number, account_holder, date_created, ifsc_code, \
         swift_code, bank, branch, membership_number";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LandDetails {
            id: row.get(0)?,
            account_number: row.get(1)?,
            account_holder: row.get(2)?,
            date_created: row.get(3)?,
            ifsc_code: row.get(4)?,
            swift_code: row.get(5)?,
            bank: row.get(6)?,
            branch: row.get(7)?,
            membership_number: row.get(8)?,
        })
    }
}

impl SqliteRepo {
    /// Insert or update a land-details record
    pub fn save_land_details(conn: &Connection, details: LandDetails) -> Result<LandDetails> {
        let sql = "INSERT INTO land_details (id, account_number, account_holder, date_created,
                 ifsc_code, swift_code, bank, branch, membership_number)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(id) DO UPDATE SET
                account_number = excluded.account_number,
                account_holder = excluded.account_holder,
                date_created = excluded.date_created,
                ifsc_code = excluded.ifsc_code,
                swift_code = excluded.swift_code,
                bank = excluded.bank,
                branch = excluded.branch,
                membership_number = excluded.membership_number";

        let id = Self::upsert(
            conn,
            details.id,
            sql,
            rusqlite::params![
                details.id,
                details.account_number,
                details.account_holder,
                details.date_created,
                details.ifsc_code,
                details.swift_code,
                details.bank,
                details.branch,
                details.membership_number,
            ],
        )?;

        Ok(LandDetails {
            id: Some(id),
            ..details
        })
    }
}

use crate::db::{schema, Database};
use crate::error::{AppError, AppResult};
use crate::models::{DispatchFields, DispatchRecord};
use chrono::Utc;

const SELECT_COLUMNS: &str = "SELECT id, dispatch_no, today_nepali_date, subject, license_no, name,
        nagrita_no, father_name, dob, issue_date, expire_date, license_category, created_at
     FROM dispatches";

/// CRUD over the `dispatches` table.
///
/// Every operation acquires its own pooled connection and returns it when the
/// call ends, whether it succeeds or fails.
#[derive(Clone)]
pub struct DispatchStore {
    db: Database,
}

impl DispatchStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn created_at_now() -> String {
        Utc::now()
            .naive_utc()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string()
    }

    pub async fn initialize(&self) -> AppResult<()> {
        let mut conn = self.db.pool().acquire().await?;
        sqlx::query(schema::CREATE_DISPATCHES_TABLE)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn create(&self, fields: &DispatchFields) -> AppResult<i64> {
        let mut conn = self.db.pool().acquire().await?;

        let result = sqlx::query(
            "INSERT INTO dispatches (dispatch_no, today_nepali_date, subject, license_no, name,
                nagrita_no, father_name, dob, issue_date, expire_date, license_category, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&fields.dispatch_no)
        .bind(&fields.today_nepali_date)
        .bind(&fields.subject)
        .bind(&fields.license_no)
        .bind(&fields.name)
        .bind(&fields.nagrita_no)
        .bind(&fields.father_name)
        .bind(&fields.dob)
        .bind(&fields.issue_date)
        .bind(&fields.expire_date)
        .bind(&fields.license_category)
        .bind(Self::created_at_now())
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!("Created dispatch record {}", id);
        Ok(id)
    }

    pub async fn list_all(&self) -> AppResult<Vec<DispatchRecord>> {
        let mut conn = self.db.pool().acquire().await?;

        let records = sqlx::query_as::<_, DispatchRecord>(&format!(
            "{} ORDER BY id DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }

    pub async fn get(&self, id: i64) -> AppResult<DispatchRecord> {
        let mut conn = self.db.pool().acquire().await?;

        let record = sqlx::query_as::<_, DispatchRecord>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        tracing::debug!("Lookup dispatch record {}: found={}", id, record.is_some());
        record.ok_or_else(|| AppError::NotFound(format!("Dispatch record {} not found", id)))
    }

    /// Overwrites every editable column. `id` and `created_at` are left alone.
    pub async fn update(&self, id: i64, fields: &DispatchFields) -> AppResult<()> {
        let mut conn = self.db.pool().acquire().await?;

        let result = sqlx::query(
            "UPDATE dispatches SET dispatch_no = ?, today_nepali_date = ?, subject = ?,
                license_no = ?, name = ?, nagrita_no = ?, father_name = ?, dob = ?,
                issue_date = ?, expire_date = ?, license_category = ?
             WHERE id = ?",
        )
        .bind(&fields.dispatch_no)
        .bind(&fields.today_nepali_date)
        .bind(&fields.subject)
        .bind(&fields.license_no)
        .bind(&fields.name)
        .bind(&fields.nagrita_no)
        .bind(&fields.father_name)
        .bind(&fields.dob)
        .bind(&fields.issue_date)
        .bind(&fields.expire_date)
        .bind(&fields.license_category)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Dispatch record {} not found",
                id
            )));
        }

        tracing::info!("Updated dispatch record {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (DispatchStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.db");
        let db = Database::connect(path.to_str().unwrap()).await.unwrap();
        let store = DispatchStore::new(db);
        store.initialize().await.unwrap();
        (store, dir)
    }

    fn sample_fields(dispatch_no: &str) -> DispatchFields {
        DispatchFields {
            dispatch_no: Some(dispatch_no.to_string()),
            today_nepali_date: Some("2081-01-01".to_string()),
            subject: Some("License renewal".to_string()),
            license_no: Some("01-06-00012345".to_string()),
            name: Some("Sita Sharma".to_string()),
            nagrita_no: Some("27-01-71-00001".to_string()),
            father_name: Some("Hari Sharma".to_string()),
            dob: Some("1990-04-14".to_string()),
            issue_date: Some("2020-01-01".to_string()),
            expire_date: Some("2025-01-01".to_string()),
            license_category: Some("B".to_string()),
        }
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (store, _dir) = create_test_store().await;
        store.initialize().await.unwrap();
        store.initialize().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let (store, _dir) = create_test_store().await;
        let fields = sample_fields("D-1");

        let id = store.create(&fields).await.unwrap();
        let record = store.get(id).await.unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.fields, fields);
        assert!(record.created_at.as_deref().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_stores_null() {
        let (store, _dir) = create_test_store().await;
        let fields = DispatchFields {
            dispatch_no: Some("D-100".to_string()),
            today_nepali_date: Some("2081-01-01".to_string()),
            ..Default::default()
        };

        let id = store.create(&fields).await.unwrap();
        let record = store.get(id).await.unwrap();

        assert_eq!(record.fields.dispatch_no.as_deref(), Some("D-100"));
        assert_eq!(record.fields.name, None);
        assert_eq!(record.fields.license_no, None);
    }

    #[tokio::test]
    async fn test_ids_increase_and_list_is_newest_first() {
        let (store, _dir) = create_test_store().await;

        let a = store.create(&sample_fields("A")).await.unwrap();
        let b = store.create(&sample_fields("B")).await.unwrap();
        let c = store.create(&sample_fields("C")).await.unwrap();
        assert!(a < b && b < c);

        let records = store.list_all().await.unwrap();
        let numbers: Vec<&str> = records
            .iter()
            .map(|r| r.fields.dispatch_no.as_deref().unwrap())
            .collect();
        assert_eq!(numbers, vec!["C", "B", "A"]);
        assert_eq!(
            records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![c, b, a]
        );
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_record() {
        let (store, _dir) = create_test_store().await;
        let first = store.create(&sample_fields("D-1")).await.unwrap();
        let before = store.list_all().await.unwrap();

        let id = store.create(&sample_fields("D-2")).await.unwrap();
        let after = store.list_all().await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert!(id > first);
        let new: Vec<_> = after.iter().filter(|r| r.id == id).collect();
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].fields, sample_fields("D-2"));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_identity() {
        let (store, _dir) = create_test_store().await;
        let id = store.create(&sample_fields("D-1")).await.unwrap();
        let original = store.get(id).await.unwrap();

        let changed = DispatchFields {
            dispatch_no: Some("D-1A".to_string()),
            today_nepali_date: Some("2081-02-15".to_string()),
            name: Some("Gita Sharma".to_string()),
            ..Default::default()
        };
        store.update(id, &changed).await.unwrap();

        let updated = store.get(id).await.unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.fields, changed);
        // Full overwrite: fields absent from the payload are cleared.
        assert_eq!(updated.fields.license_no, None);
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let (store, _dir) = create_test_store().await;
        store.create(&sample_fields("D-1")).await.unwrap();

        let err = store.get(999_999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (store, _dir) = create_test_store().await;
        let id = store.create(&sample_fields("D-1")).await.unwrap();

        let err = store
            .update(999_999, &sample_fields("D-X"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let untouched = store.get(id).await.unwrap();
        assert_eq!(untouched.fields, sample_fields("D-1"));
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.db");
        let path = path.to_str().unwrap();

        let store = DispatchStore::new(Database::connect(path).await.unwrap());
        store.initialize().await.unwrap();
        let id = store.create(&sample_fields("D-1")).await.unwrap();
        drop(store);

        let reopened = DispatchStore::new(Database::connect(path).await.unwrap());
        reopened.initialize().await.unwrap();
        assert_eq!(reopened.get(id).await.unwrap().fields, sample_fields("D-1"));
    }
}

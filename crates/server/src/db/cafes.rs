//! Cafe repository for database operations.
//!
//! Queries are bound at runtime (`SQLite` has no compile-time database for
//! the `query!` macros); rows map onto [`Cafe`] via `FromRow`.

use sqlx::SqlitePool;

use cafe_api_core::CafeId;

use super::RepositoryError;
use crate::models::{Cafe, CafeFields};

/// Repository for cafe database operations.
pub struct CafeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CafeRepository<'a> {
    /// Create a new cafe repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every cafe, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all(&self) -> Result<Vec<Cafe>, RepositoryError> {
        let cafes = sqlx::query_as::<_, Cafe>(
            r"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(cafes)
    }

    /// Fetch a cafe by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
        let cafe = sqlx::query_as::<_, Cafe>(
            r"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cafe)
    }

    /// Fetch every cafe whose location equals `location` exactly.
    ///
    /// The comparison is case-sensitive (`SQLite` BINARY collation).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, RepositoryError> {
        let cafes = sqlx::query_as::<_, Cafe>(
            r"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            WHERE location = ?
            ORDER BY id
            ",
        )
        .bind(location)
        .fetch_all(self.pool)
        .await?;

        Ok(cafes)
    }

    /// Insert a new cafe, returning the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, fields: &CafeFields) -> Result<CafeId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO cafes (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&fields.name)
        .bind(&fields.map_url)
        .bind(&fields.img_url)
        .bind(&fields.location)
        .bind(&fields.seats)
        .bind(fields.has_toilet)
        .bind(fields.has_wifi)
        .bind(fields.has_sockets)
        .bind(fields.can_take_calls)
        .bind(&fields.coffee_price)
        .execute(self.pool)
        .await?;

        Ok(CafeId::new(result.last_insert_rowid()))
    }

    /// Update only the coffee price of a cafe.
    ///
    /// Returns `false` if no cafe with that id exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_price(
        &self,
        id: CafeId,
        coffee_price: &str,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
            .bind(coffee_price)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Overwrite every mutable field of a cafe.
    ///
    /// Returns `false` if no cafe with that id exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn replace(&self, id: CafeId, fields: &CafeFields) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cafes
            SET name = ?, map_url = ?, img_url = ?, location = ?, seats = ?,
                has_toilet = ?, has_wifi = ?, has_sockets = ?, can_take_calls = ?,
                coffee_price = ?
            WHERE id = ?
            ",
        )
        .bind(&fields.name)
        .bind(&fields.map_url)
        .bind(&fields.img_url)
        .bind(&fields.location)
        .bind(&fields.seats)
        .bind(fields.has_toilet)
        .bind(fields.has_wifi)
        .bind(fields.has_sockets)
        .bind(fields.can_take_calls)
        .bind(&fields.coffee_price)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a cafe by its id.
    ///
    /// Returns `false` if no cafe with that id exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: CafeId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn sample(name: &str, location: &str) -> CafeFields {
        CafeFields {
            name: name.to_owned(),
            map_url: "https://maps.example.com/cafe".to_owned(),
            img_url: "https://img.example.com/cafe.jpg".to_owned(),
            location: location.to_owned(),
            seats: "20-30".to_owned(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: "£2.50".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        let first = repo.insert(&sample("First", "Soho")).await.unwrap();
        let second = repo.insert(&sample("Second", "Soho")).await.unwrap();
        assert_ne!(first, second);

        // AUTOINCREMENT: ids are not reused after a delete.
        assert!(repo.delete(second).await.unwrap());
        let third = repo.insert(&sample("Third", "Soho")).await.unwrap();
        assert!(third.as_i64() > second.as_i64());
    }

    #[tokio::test]
    async fn test_get_roundtrip() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        let fields = sample("Roundtrip", "Peckham");
        let id = repo.insert(&fields).await.unwrap();

        let cafe = repo.get(id).await.unwrap().unwrap();
        assert_eq!(cafe.id, id);
        assert_eq!(cafe.name, fields.name);
        assert_eq!(cafe.location, fields.location);
        assert_eq!(cafe.seats, fields.seats);
        assert!(cafe.has_toilet);
        assert!(!cafe.has_wifi);
        assert!(cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price, fields.coffee_price);

        assert!(repo.get(CafeId::new(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_location_is_exact_and_case_sensitive() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        repo.insert(&sample("A", "Soho")).await.unwrap();
        repo.insert(&sample("B", "soho")).await.unwrap();
        repo.insert(&sample("C", "Soho Square")).await.unwrap();

        let found = repo.find_by_location("Soho").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().unwrap().name, "A");

        assert!(repo.find_by_location("Mayfair").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_price_changes_only_the_price() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        let id = repo.insert(&sample("Priced", "Angel")).await.unwrap();
        let before = repo.get(id).await.unwrap().unwrap();

        assert!(repo.update_price(id, "£3.10").await.unwrap());
        let after = repo.get(id).await.unwrap().unwrap();

        assert_eq!(after.coffee_price, "£3.10");
        assert_eq!(
            Cafe {
                coffee_price: before.coffee_price.clone(),
                ..after.clone()
            },
            before
        );

        assert!(!repo.update_price(CafeId::new(9999), "£1.00").await.unwrap());
    }

    #[tokio::test]
    async fn test_replace_overwrites_every_field() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        let id = repo.insert(&sample("Old", "Old Town")).await.unwrap();

        let mut new_fields = sample("New", "New Town");
        new_fields.has_wifi = true;
        new_fields.coffee_price = "£4.00".to_owned();
        assert!(repo.replace(id, &new_fields).await.unwrap());

        let cafe = repo.get(id).await.unwrap().unwrap();
        assert_eq!(cafe.name, "New");
        assert_eq!(cafe.location, "New Town");
        assert!(cafe.has_wifi);
        assert_eq!(cafe.coffee_price, "£4.00");

        assert!(!repo.replace(CafeId::new(9999), &new_fields).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let pool = test_pool().await;
        let repo = CafeRepository::new(&pool);

        let keep = repo.insert(&sample("Keep", "Here")).await.unwrap();
        let gone = repo.insert(&sample("Gone", "There")).await.unwrap();

        assert!(repo.delete(gone).await.unwrap());
        assert!(!repo.delete(gone).await.unwrap());
        assert!(repo.get(keep).await.unwrap().is_some());
        assert_eq!(repo.all().await.unwrap().len(), 1);
    }
}

use crate::core::stores::{LikeStore, MatchStore, ProfileStore, SportCatalog, StoreError};
use crate::models::{Like, MatchRecord, Profile, SkillLevel, Sport, SportEntry};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

/// PostgreSQL client backing every storage port.
///
/// Owns the connection pool and runs migrations on startup. The matches
/// table carries the unordered-pair uniqueness constraint that makes the
/// swipe engine's match creation idempotent.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(format!("migration failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &sqlx::postgres::PgRow) -> Profile {
    Profile {
        user_id: row.get("user_id"),
        first_name: row.get("first_name"),
        age: row.get::<i16, _>("age") as u8,
        gender: row.get("gender"),
        city: row.get("city"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        bio: row.get("bio"),
        photo_url: row.get("photo_url"),
        max_distance_km: row.get::<i16, _>("max_distance_km") as u16,
        sports: Vec::new(),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl ProfileStore for PostgresClient {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let query = r#"
            SELECT user_id, first_name, age, gender, city, latitude, longitude,
                   bio, photo_url, max_distance_km, created_at
            FROM profiles
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut profile = profile_from_row(&row);

        let sport_rows = sqlx::query(
            "SELECT sport_id, level FROM profile_sports WHERE user_id = $1 ORDER BY sport_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        profile.sports = sport_rows
            .iter()
            .map(|r| SportEntry {
                sport_id: r.get("sport_id"),
                level: r.get::<SkillLevel, _>("level"),
            })
            .collect();

        Ok(Some(profile))
    }

    async fn all_with_sports(&self) -> Result<Vec<Profile>, StoreError> {
        // Single join instead of a per-candidate sports lookup; rows arrive
        // ordered so grouping is one linear pass.
        let query = r#"
            SELECT p.user_id, p.first_name, p.age, p.gender, p.city,
                   p.latitude, p.longitude, p.bio, p.photo_url,
                   p.max_distance_km, p.created_at,
                   ps.sport_id, ps.level
            FROM profiles p
            JOIN profile_sports ps ON ps.user_id = p.user_id
            ORDER BY p.user_id, ps.sport_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut profiles: Vec<Profile> = Vec::new();
        for row in &rows {
            let user_id: String = row.get("user_id");
            if profiles.last().map(|p| p.user_id.as_str()) != Some(user_id.as_str()) {
                profiles.push(profile_from_row(row));
            }
            if let Some(profile) = profiles.last_mut() {
                profile.sports.push(SportEntry {
                    sport_id: row.get("sport_id"),
                    level: row.get::<SkillLevel, _>("level"),
                });
            }
        }

        tracing::debug!("Loaded {} candidate profiles", profiles.len());

        Ok(profiles)
    }
}

#[async_trait]
impl SportCatalog for PostgresClient {
    async fn all_sports(&self) -> Result<Vec<Sport>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM sports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Sport {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }
}

#[async_trait]
impl LikeStore for PostgresClient {
    async fn exists(&self, liker_id: &str, liked_id: &str) -> Result<bool, StoreError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE liker_id = $1 AND liked_id = $2) AS present",
        )
        .bind(liker_id)
        .bind(liked_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("present"))
    }

    async fn create(&self, like: &Like) -> Result<bool, StoreError> {
        // ON CONFLICT DO NOTHING turns a duplicate race into rows_affected=0
        let result = sqlx::query(
            r#"
            INSERT INTO likes (liker_id, liked_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (liker_id, liked_id) DO NOTHING
            "#,
        )
        .bind(&like.liker_id)
        .bind(&like.liked_id)
        .bind(like.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn liked_user_ids(&self, liker_id: &str) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT liked_id FROM likes WHERE liker_id = $1")
            .bind(liker_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("liked_id")).collect())
    }
}

fn match_from_row(row: &sqlx::postgres::PgRow) -> MatchRecord {
    MatchRecord {
        match_id: row.get("match_id"),
        user_a: row.get("user_a"),
        user_b: row.get("user_b"),
        matched_at: row.get("matched_at"),
    }
}

#[async_trait]
impl MatchStore for PostgresClient {
    async fn exists(&self, user_a: &str, user_b: &str) -> Result<bool, StoreError> {
        let (a, b) = MatchRecord::canonical_pair(user_a, user_b);

        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM matches WHERE user_a = $1 AND user_b = $2) AS present",
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("present"))
    }

    async fn create(&self, user_a: &str, user_b: &str) -> Result<MatchRecord, StoreError> {
        let (a, b) = MatchRecord::canonical_pair(user_a, user_b);
        let match_id = Uuid::new_v4().to_string();

        // The losing side of a concurrent insert gets no row back and
        // reads the winner's instead.
        let inserted = sqlx::query(
            r#"
            INSERT INTO matches (match_id, user_a, user_b, matched_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_a, user_b) DO NOTHING
            RETURNING match_id, user_a, user_b, matched_at
            "#,
        )
        .bind(&match_id)
        .bind(&a)
        .bind(&b)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(match_from_row(&row));
        }

        let row = sqlx::query(
            "SELECT match_id, user_a, user_b, matched_at FROM matches WHERE user_a = $1 AND user_b = $2",
        )
        .bind(&a)
        .bind(&b)
        .fetch_one(&self.pool)
        .await?;

        Ok(match_from_row(&row))
    }

    async fn matches_for(&self, user_id: &str) -> Result<Vec<MatchRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT match_id, user_a, user_b, matched_at
            FROM matches
            WHERE user_a = $1 OR user_b = $1
            ORDER BY matched_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    async fn matched_user_ids(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT CASE WHEN user_a = $1 THEN user_b ELSE user_a END AS other_id
            FROM matches
            WHERE user_a = $1 OR user_b = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("other_id")).collect())
    }
}

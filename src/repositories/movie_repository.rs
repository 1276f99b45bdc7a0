// src/repositories/movie_repository.rs
//
// Movie persistence

use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::genre::GenreSet;
use crate::domain::movie::Movie;
use crate::error::{AppError, AppResult};

/// Store owning the movie collection
///
/// `list_all` returns a snapshot in storage order: new listings are appended,
/// updates keep their position.
#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    fn save(&self, movie: &Movie) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Movie>>;
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let genres_json: String = row.get("genres")?;
        let genres: GenreSet = serde_json::from_str(&genres_json)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Movie {
            id,
            title: row.get("title")?,
            year: row.get("year")?,
            runtime: row.get("runtime")?,
            director: row.get("director")?,
            actors: row.get("actors")?,
            genres,
        })
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn save(&self, movie: &Movie) -> AppResult<()> {
        let conn = self.pool.get()?;

        let genres_json = serde_json::to_string(&movie.genres)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO movies (
                id, title, year, runtime, director, actors, genres, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                year = excluded.year,
                runtime = excluded.runtime,
                director = excluded.director,
                actors = excluded.actors,
                genres = excluded.genres,
                updated_at = excluded.updated_at",
            params![
                movie.id.to_string(),
                movie.title,
                movie.year,
                movie.runtime,
                movie.director,
                movie.actors,
                genres_json,
                now,
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, year, runtime, director, actors, genres
             FROM movies WHERE id = ?1",
        )?;

        match stmt.query_row(params![id.to_string()], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, year, runtime, director, actors, genres
             FROM movies
             ORDER BY seq",
        )?;

        let movies: Vec<Movie> = stmt
            .query_map([], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("DELETE FROM movies WHERE id = ?1", params![id.to_string()])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM movies WHERE id = ?1",
            params![id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use uuid::Uuid;

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{CatalogQuery, FieldName, SortKey};
use crate::services::SaveOutcome;

fn parse_movie_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw)
        .map_err(|e| ErrorResponse::validation(format!("Invalid movie id: {}", e)).to_json())
}

/// Search the catalog (list page, search box and sort dropdown)
pub fn search_movies(dto: SearchDto, state: &AppState) -> Result<SearchResultsDto, String> {
    let sort_key = dto
        .sort_by
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()
        .map_err(|e| ErrorResponse::validation(e.to_string()).to_json())?;

    // Read before the snapshot so a concurrent write marks these results stale
    let revision = state.list_refresh.revision();
    let config = state.movie_service.config();
    let query = CatalogQuery {
        term: dto.term,
        sort_key: sort_key.or(config.default_sort),
        page_size: config.page_size,
        page: dto.page,
    };

    let movies = state.movie_service.run_query(&query).to_error_response()?;
    Ok(SearchResultsDto::from_movies(movies, revision))
}

/// Polled by the list view with the revision of its current results
pub fn check_refresh(seen_revision: u64, state: &AppState) -> RefreshDto {
    let refresh = &state.list_refresh;
    RefreshDto {
        revision: refresh.revision(),
        stale: refresh.is_stale(seen_revision),
        last_change: refresh.last_change(),
    }
}

/// Get a single movie by ID
pub fn get_movie(movie_id: String, state: &AppState) -> Result<Option<MovieDto>, String> {
    let id = parse_movie_id(&movie_id)?;
    let movie = state.movie_service.get_movie(id).to_error_response()?;
    Ok(movie.map(MovieDto::from))
}

/// Save button of the edit dialog (new or existing listing)
pub fn save_movie(dto: MovieDraftDto, state: &AppState) -> Result<SaveResponseDto, String> {
    let mut session = match dto.id.as_deref() {
        Some(raw) => {
            let id = parse_movie_id(raw)?;
            state.movie_service.open_editor(id).to_error_response()?
        }
        None => state.movie_service.open_new_editor(),
    };

    let fields = [
        (FieldName::Title, dto.title),
        (FieldName::Year, dto.year),
        (FieldName::Runtime, dto.runtime),
        (FieldName::Director, dto.director),
        (FieldName::Actors, dto.actors),
    ];
    for (field, value) in fields {
        session
            .set_field(field, value)
            .map_err(|e| ErrorResponse::from_app_error(e.into()).to_json())?;
    }

    session
        .with_tags(|selector, genres| {
            while genres.remove_last().is_some() {}
            for genre in &dto.genres {
                selector.select(genres, genre);
            }
        })
        .map_err(|e| ErrorResponse::from_app_error(e.into()).to_json())?;

    match state.movie_service.save(&mut session).to_error_response()? {
        SaveOutcome::Saved { movie, notice, .. } => Ok(SaveResponseDto::saved(movie, notice)),
        SaveOutcome::Rejected(errors) => Ok(SaveResponseDto::rejected(&errors)),
    }
}

/// Remove a listing after confirmation; returns the toast text
pub fn delete_movie(movie_id: String, state: &AppState) -> Result<String, String> {
    let id = parse_movie_id(&movie_id)?;
    let notice = state.movie_service.delete(id).to_error_response()?;
    Ok(notice.to_string())
}

/// Genres offered by the tag menu
pub fn list_genres(state: &AppState) -> Vec<String> {
    state.movie_service.config().genres.clone()
}

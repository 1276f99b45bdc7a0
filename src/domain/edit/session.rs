use super::draft::Draft;
use super::field::{FieldErrors, FieldName};
use super::validator::validate;
use crate::domain::genre::{GenreSelector, GenreSet};
use crate::domain::movie::Movie;
use crate::domain::{DomainError, DomainResult};

/// Lifecycle of one edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Draft is being composed
    Open,
    /// Save attempted; validation running
    Validating,
    /// Save rejected; the dialog stays open with these errors
    Invalid(FieldErrors),
    /// Draft promoted to a Movie, ready for persistence
    Accepted(Movie),
    /// Dialog dismissed; draft discarded
    Closed,
}

impl EditState {
    pub fn name(&self) -> &'static str {
        match self {
            EditState::Open => "open",
            EditState::Validating => "validating",
            EditState::Invalid(_) => "invalid",
            EditState::Accepted(_) => "accepted",
            EditState::Closed => "closed",
        }
    }
}

/// An edit dialog session: the draft, its tag menu and the state machine
///
/// Transitions:
/// Open --save--> Validating --> Invalid | Accepted
/// Invalid --edit/save--> Validating
/// Open | Invalid | Accepted --cancel--> Closed
/// Accepted --take_accepted--> Closed
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: Draft,
    selector: GenreSelector,
    state: EditState,
}

impl EditSession {
    pub fn open(draft: Draft, selector: GenreSelector) -> Self {
        Self {
            draft,
            selector,
            state: EditState::Open,
        }
    }

    /// Session editing an existing movie
    pub fn for_movie(movie: &Movie, selector: GenreSelector) -> Self {
        Self::open(Draft::from_movie(movie), selector)
    }

    /// Session creating a new listing
    pub fn blank(selector: GenreSelector) -> Self {
        Self::open(Draft::blank(), selector)
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn selector(&self) -> &GenreSelector {
        &self.selector
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.state, EditState::Open | EditState::Invalid(_))
    }

    pub fn is_closed(&self) -> bool {
        self.state == EditState::Closed
    }

    /// Errors from the last rejected save, if any
    pub fn errors(&self) -> Option<&FieldErrors> {
        match &self.state {
            EditState::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn accepted(&self) -> Option<&Movie> {
        match &self.state {
            EditState::Accepted(movie) => Some(movie),
            _ => None,
        }
    }

    fn ensure_editable(&self) -> DomainResult<()> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(DomainError::InvalidStateTransition(format!(
                "cannot edit a draft in state {}",
                self.state.name()
            )))
        }
    }

    /// Replace a text field of the draft
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> DomainResult<()> {
        self.ensure_editable()?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Run a tag-menu interaction against the draft's genres
    pub fn with_tags<R>(
        &mut self,
        interaction: impl FnOnce(&mut GenreSelector, &mut GenreSet) -> R,
    ) -> DomainResult<R> {
        self.ensure_editable()?;
        Ok(interaction(&mut self.selector, &mut self.draft.genres))
    }

    /// Save trigger: validate the draft and move to Invalid or Accepted
    pub fn attempt_save(&mut self) -> DomainResult<&EditState> {
        self.ensure_editable()?;
        self.state = EditState::Validating;
        self.selector.close();

        self.state = match validate(&self.draft) {
            Ok(movie) => {
                log::debug!("Draft {} accepted", self.draft.id);
                EditState::Accepted(movie)
            }
            Err(errors) => {
                log::debug!("Draft {} rejected: {}", self.draft.id, errors);
                EditState::Invalid(errors)
            }
        };

        Ok(&self.state)
    }

    /// Hand the accepted movie over and close the session
    pub fn take_accepted(&mut self) -> DomainResult<Movie> {
        match std::mem::replace(&mut self.state, EditState::Closed) {
            EditState::Accepted(movie) => Ok(movie),
            other => {
                let name = other.name();
                self.state = other;
                Err(DomainError::InvalidStateTransition(format!(
                    "no accepted movie in state {}",
                    name
                )))
            }
        }
    }

    /// Dismiss the dialog; the draft is discarded
    pub fn cancel(&mut self) {
        self.selector.close();
        self.state = EditState::Closed;
    }
}

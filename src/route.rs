use crate::task::TaskId;
use thiserror::Error;

const EDIT_TASK_PREFIX: &str = "/edit-task/";

/// Navigation targets a card can link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    EditTask(TaskId),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches path '{0}'")]
    NoMatch(String),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EditTask(_) => "edit-task",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Self::EditTask(_) => "/edit-task/:id",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::EditTask(id) => format!("{EDIT_TASK_PREFIX}{id}"),
        }
    }

    /// Resolves a path back into a route. A single trailing slash is tolerated.
    ///
    /// `path` inserts the id verbatim, so ids containing `/` produce paths
    /// this cannot match.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match trimmed.strip_prefix(EDIT_TASK_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Self::EditTask(TaskId::new(id))),
            _ => Err(RouteError::NoMatch(path.to_string())),
        }
    }
}

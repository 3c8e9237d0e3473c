use crate::task::{Status, Task, TaskId};
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to read tasks from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tasks from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only set of tasks grouped into status columns, with a browsing cursor.
#[derive(Debug, Default)]
pub struct Board {
    tasks: Vec<Task>,
    selected_status: usize, // index into Status::ALL, always in range
    selected_task: usize,   // index within the selected column
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            selected_status: 0,
            selected_task: 0,
        }
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let tasks: Vec<Task> = serde_json::from_str(data)?;
        debug!(task_count = tasks.len(), "parsed task document");
        Ok(Self::new(tasks))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let board = Self::from_json(&data).map_err(|source| BoardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), task_count = board.tasks.len(), "tasks loaded");
        Ok(board)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected_column_index(&self) -> usize {
        self.selected_status
    }

    pub fn selected_task_index(&self) -> usize {
        self.selected_task
    }

    pub fn columns(&self) -> [Status; 2] {
        Status::ALL
    }

    pub fn tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn selected_column(&self) -> Status {
        Status::ALL[self.selected_status]
    }

    pub fn selected(&self) -> Option<&Task> {
        self.tasks_by_status(self.selected_column())
            .get(self.selected_task)
            .copied()
    }

    pub fn select_left(&mut self) {
        if self.selected_status > 0 {
            self.selected_status -= 1;
            self.clamp_task();
        }
    }

    pub fn select_right(&mut self) {
        if self.selected_status < Status::ALL.len() - 1 {
            self.selected_status += 1;
            self.clamp_task();
        }
    }

    pub fn select_up(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let max_tasks = self.tasks_by_status(self.selected_column()).len();
        if self.selected_task + 1 < max_tasks {
            self.selected_task += 1;
        }
    }

    fn clamp_task(&mut self) {
        let max_tasks = self.tasks_by_status(self.selected_column()).len();
        self.selected_task = self.selected_task.min(max_tasks.saturating_sub(1));
    }
}

//! In-memory repository for task management.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{PageRequest, Task, TaskId, TasksPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn insert(&mut self, task: &Task) {
        self.insertion_order.push(task.id());
        self.tasks.insert(task.id(), task.clone());
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a task, returning whether it existed.
    ///
    /// The task API exposes no deletion; this exists so tests can simulate a
    /// record disappearing underneath a running use case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        state.insertion_order.retain(|stored| *stored != id);
        Ok(state.tasks.remove(&id).is_some())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task);
        Ok(task.clone())
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.write()?;

        // Check the whole batch before touching state so a rejected batch
        // leaves nothing behind.
        let mut batch_ids = HashSet::with_capacity(tasks.len());
        for task in tasks {
            if state.tasks.contains_key(&task.id()) || !batch_ids.insert(task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
        }

        for task in tasks {
            state.insert(task);
        }
        Ok(tasks.to_vec())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self, request: PageRequest) -> TaskRepositoryResult<TasksPage> {
        let state = self.read()?;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let tasks = state
            .insertion_order
            .iter()
            .skip(skip)
            .take(take)
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect();
        let total_count = u64::try_from(state.tasks.len()).unwrap_or(u64::MAX);
        Ok(TasksPage::new(tasks, request, total_count))
    }

    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.write()?;
        let Some(stored) = state.tasks.get_mut(&task.id()) else {
            return Ok(None);
        };
        *stored = task.clone();
        Ok(Some(stored.clone()))
    }
}

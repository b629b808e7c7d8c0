//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PageRequest, PersistedTaskData, Task, TaskId, TasksPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema applied by [`PostgresTaskRepository::ensure_schema`].
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-15-000000_create_tasks/up.sql");

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and wraps it in a
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot
    /// open its initial connections.
    pub fn connect(database_url: &str, max_size: u32) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the `tasks` table and its index when they do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_insert_error(err, task_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn save_all(&self, tasks_to_save: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        if tasks_to_save.is_empty() {
            return Ok(Vec::new());
        }
        let first_id = tasks_to_save
            .first()
            .map(Task::id)
            .unwrap_or_default();
        let positions: HashMap<uuid::Uuid, usize> = tasks_to_save
            .iter()
            .enumerate()
            .map(|(position, task)| (task.id().into_inner(), position))
            .collect();
        let new_rows: Vec<NewTaskRow> = tasks_to_save.iter().map(to_new_row).collect();

        self.run_blocking(move |connection| {
            // A single multi-row INSERT either stores the whole batch or
            // fails without side effects.
            let mut rows = diesel::insert_into(tasks::table)
                .values(&new_rows)
                .returning(TaskRow::as_returning())
                .get_results::<TaskRow>(connection)
                .map_err(|err| map_insert_error(err, first_id))?;
            rows.sort_by_key(|row| positions.get(&row.id).copied().unwrap_or(usize::MAX));
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self, request: PageRequest) -> TaskRepositoryResult<TasksPage> {
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let limit = i64::from(request.size());

        self.run_blocking(move |connection| {
            let (rows, total) = connection
                .build_transaction()
                .read_only()
                .repeatable_read()
                .run::<_, DieselError, _>(|transaction| {
                    let rows = tasks::table
                        .order((tasks::created_at.asc(), tasks::id.asc()))
                        .offset(offset)
                        .limit(limit)
                        .select(TaskRow::as_select())
                        .load::<TaskRow>(transaction)?;
                    let total = tasks::table.count().get_result::<i64>(transaction)?;
                    Ok((rows, total))
                })
                .map_err(TaskRepositoryError::persistence)?;

            let total_count = u64::try_from(total).map_err(TaskRepositoryError::persistence)?;
            let page_tasks = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            Ok(TasksPage::new(page_tasks, request, total_count))
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<Option<Task>> {
        let id = task.id().into_inner();
        let completed = task.is_completed();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id)))
                .set((
                    tasks::completed.eq(completed),
                    tasks::updated_at.eq(updated_at),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        label: task.label().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        completed: task.is_completed(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        label,
        description,
        completed,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        label,
        description,
        completed,
        created_at,
        updated_at,
    };
    Task::from_persisted(data).map_err(TaskRepositoryError::persistence)
}

fn map_insert_error(err: DieselError, task_id: TaskId) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::DuplicateTask(task_id)
        }
        other => TaskRepositoryError::persistence(other),
    }
}

use crate::{
    db::DbPool,
    error::{AppError, Result},
    task::task_models::Task,
};

#[derive(Clone)]
pub struct TaskRepository {
    pool: DbPool,
}

impl TaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: &str, description: &str, completed: bool) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, completed)
             VALUES (?, ?, ?)
             RETURNING id, title, description, completed",
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Task> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    pub async fn find_all(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed FROM tasks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Writes every mutable field of `task` onto the row with the same id.
    pub async fn update(&self, task: &Task) -> Result<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = ?, description = ?, completed = ?
             WHERE id = ?
             RETURNING id, title, description, completed",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(task.id))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Removes all completed tasks in one statement and returns how many went.
    pub async fn delete_completed(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE completed = TRUE")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task {} not found", id))
}

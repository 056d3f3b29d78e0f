use crate::{
    index::index,
    state::AppState,
    task::{self, CreateTaskRequest, MessageResponse, Task, TaskListResponse, UpdateTaskRequest},
};
use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        task::task_handlers::get_tasks,
        task::task_handlers::get_task,
        task::task_handlers::create_task,
        task::task_handlers::update_task,
        task::task_handlers::delete_task,
        task::task_handlers::toggle_task,
        task::task_handlers::clear_completed_tasks,
    ),
    components(
        schemas(
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskListResponse,
            MessageResponse,
            Task,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let task_routes = Router::new()
        .route("/", get(task::get_tasks).post(task::create_task))
        .route("/clear", delete(task::clear_completed_tasks))
        .route(
            "/:id",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .route("/:id/toggle", put(task::toggle_task));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(index))
        .nest("/tasks", task_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

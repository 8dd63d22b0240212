use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: Option<String>,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryDoc {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: Option<i64>,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(ToSchema)]
pub struct ServiceDetailDoc {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub category_name: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::create,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::services::create,
        crate::routes::services::list,
        crate::routes::services::list_by_category,
        crate::routes::services::get,
        crate::routes::services::update,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDoc,
            ServiceDoc,
            ServiceDetailDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "services"),
    )
)]
pub struct ApiDoc;

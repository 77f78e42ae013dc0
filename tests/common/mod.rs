use lectern::config::cors::CorsConfig;
use lectern::config::jwt::JwtConfig;
use lectern::router::init_router;
use lectern::state::AppState;
use lectern::utils::jwt::create_access_token;
use lectern::utils::password::hash_password;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user with the given role ("teacher" or "student") and
/// mint an access token for it.
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    role: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, $5::user_role)
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let token = create_access_token(id, email, &test_jwt_config()).unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

#[allow(dead_code)]
pub async fn create_test_course(
    tx: &mut Transaction<'_, Postgres>,
    teacher_id: Uuid,
    title: &str,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (teacher_id, title, description)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(teacher_id)
    .bind(title)
    .bind(Some("Test course description"))
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_section(
    tx: &mut Transaction<'_, Postgres>,
    course_id: Uuid,
    title: &str,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO course_sections (course_id, title, position)
         VALUES ($1, $2, 0)
         RETURNING id",
    )
    .bind(course_id)
    .bind(title)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

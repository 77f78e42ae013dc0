use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, RegisterRequestDto};
use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::modules::enrollments::model::{
    CourseEnrollment, EnrollmentWithCourse, UpdateProgressDto,
};
use crate::modules::materials::model::{CourseMaterial, CreateMaterialDto};
use crate::modules::sections::model::{CourseSection, CreateSectionDto};
use crate::modules::users::model::{UpdateProfileDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::sections::controller::get_sections,
        crate::modules::sections::controller::create_section,
        crate::modules::materials::controller::get_materials,
        crate::modules::materials::controller::create_material,
        crate::modules::enrollments::controller::enroll_in_course,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::update_course_progress,
    ),
    components(
        schemas(
            User,
            UserRole,
            UpdateProfileDto,
            RegisterRequestDto,
            LoginRequest,
            AuthResponse,
            ErrorResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            CourseSection,
            CreateSectionDto,
            CourseMaterial,
            CreateMaterialDto,
            CourseEnrollment,
            EnrollmentWithCourse,
            UpdateProgressDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "User", description = "Profile endpoints"),
        (name = "Courses", description = "Teacher course management"),
        (name = "Course Sections", description = "Sections under owned courses"),
        (name = "Course Materials", description = "Materials under owned sections"),
        (name = "Course Enrollment", description = "Student enrollment endpoints"),
        (name = "Course Progress", description = "Student progress tracking")
    ),
    info(
        title = "Lectern API",
        version = "0.1.0",
        description = "A course-management REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication and role-scoped access.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

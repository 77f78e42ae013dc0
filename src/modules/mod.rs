pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod materials;
pub mod sections;
pub mod users;

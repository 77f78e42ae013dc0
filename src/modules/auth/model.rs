use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::{User, UserRole};

// JWT claims carried by both access and refresh tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub user_type: UserRole,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Envelope returned by both register and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub refresh: String,
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_dto_deserialize() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","password":"password123","user_type":"teacher"}"#;
        let dto: RegisterRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.email, "ada@example.com");
        assert_eq!(dto.user_type, UserRole::Teacher);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_dto_rejects_short_password() {
        let dto = RegisterRequestDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
            user_type: UserRole::Student,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_unknown_role() {
        let json = r#"{"first_name":"A","last_name":"B","email":"a@b.com","password":"password123","user_type":"admin"}"#;
        assert!(serde_json::from_str::<RegisterRequestDto>(json).is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let dto = LoginRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}

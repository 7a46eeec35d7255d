//! 인증 결과 및 인가 요구사항 모델

pub mod authenticated_identity;
pub mod required_roles;

pub use authenticated_identity::AuthenticatedIdentity;
pub use required_roles::RequiredRoles;

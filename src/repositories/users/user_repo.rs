//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **트레이트 경계**: 서비스는 [`UserRepository`] 트레이트에만 의존
//! - **MongoDB 구현**: [`MongoUserRepository`]가 `users` 컬렉션을 사용
//! - **데이터 무결성**: 이메일/사용자명 유니크 인덱스 관리

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::is_duplicate_key;

pub const USER_COLLECTION: &str = "users";

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user already exists with this email";
pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user already exists with this username";

/// 사용자 데이터 액세스 트레이트
///
/// 이메일과 사용자명은 호출 전에 소문자로 정규화되어 있어야 합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장 후 ID가 채워진 엔티티 반환
    ///
    /// 유니크 제약 위반은 `AppError::ConflictError`로 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), created_at(desc)
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성은 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    // 인덱스 이름으로 충돌 필드 구분
                    if e.to_string().contains("username") {
                        AppError::ConflictError(DUPLICATE_USERNAME_MESSAGE.to_string())
                    } else {
                        AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string())
                    }
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted user id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }
}

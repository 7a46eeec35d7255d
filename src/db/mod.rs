//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # 실행 환경별 MongoDB 연결 URI (APP_ENV 기준으로 선택)
//! export MONGO_URI_DEVELOPMENT="mongodb://localhost:27017"
//! export MONGO_URI_TEST="mongodb://localhost:27017"
//! export MONGO_URI_PRODUCTION="mongodb+srv://..."
//!
//! # 사용할 데이터베이스 이름 (기본값: jotink)
//! export MONGODB_DB_NAME="jotink"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new().await?);
//! let user_repo = MongoUserRepository::new(database.clone());
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::AppError;

/// MongoDB 클라이언트와 데이터베이스 이름을 묶은 연결 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로부터 연결을 생성하고 ping으로 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 연결 URI가 설정되지 않음
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn new() -> Result<Self, AppError> {
        let mongodb_uri = DatabaseConfig::uri().ok_or_else(|| {
            AppError::InternalError("MongoDB connection URI is not configured".to_string())
        })?;

        Self::connect(&mongodb_uri, &DatabaseConfig::database_name()).await
    }

    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some("notes_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

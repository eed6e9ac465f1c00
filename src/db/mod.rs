//! Database Connection Management Module
//!
//! 문서 저장소 연결 관리를 담당하는 모듈입니다. Azure Cosmos DB
//! 계정에 MongoDB 호환 API로 접속하며, 접속 URI는
//! [`StoreConfig`](crate::config::StoreConfig)에서 렌더링합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use loan_service_backend::config::StoreConfig;
//! use loan_service_backend::db::Database;
//!
//! let config = StoreConfig::from_env()?;
//! let database = Database::connect(&config).await?;
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::store_config::StoreConfig;
use crate::core::errors::{AppError, AppResult};

/// 문서 저장소 연결 래퍼
///
/// MongoDB 클라이언트와 논리 데이터베이스 이름을 관리하며,
/// 리포지토리 계층에 컬렉션 접근 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 논리 데이터베이스 ID
    database_name: String,
}

impl Database {
    /// 저장소 설정으로 새 연결을 생성합니다.
    ///
    /// 접속 URI를 파싱하고 `ping` 커맨드로 연결 상태를 검증한 뒤
    /// Database 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `DatabaseError` - URI 파싱 실패, 클라이언트 생성 실패,
    ///   연결 검증 실패
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(config.connection_uri())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 모니터링 및 서버 로그에서 애플리케이션을 식별하기 위한 이름
        client_options.app_name = Some("loan_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let database_name = config.database_id().to_string();

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ 문서 저장소 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 이름으로 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.client.database(&self.database_name).collection(name)
    }

    /// 논리 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

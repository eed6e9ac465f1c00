//! # 애플리케이션 서비스 컨테이너
//!
//! 프로세스 시작 시 한 번 만들어 각 소비자에게 핸들로 전달하는
//! 명시적 의존성 주입 구조체입니다. 전역 상태 없이, 설정에서
//! 리포지토리까지의 조립을 이 타입 하나가 담당합니다.
//!
//! 리포지토리 구성은 첫 사용 시점까지 지연되며, 동시에 처음
//! 호출되어도 정확히 하나의 인스턴스만 만들어집니다
//! (`tokio::sync::OnceCell`).
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use loan_service_backend::config::AppServices;
//!
//! // 프로세스 시작 시: COSMOS_KEY가 없으면 여기서 즉시 실패한다
//! let services = AppServices::from_env()?;
//!
//! // 소비자 측: 첫 호출에서 저장소 연결이 만들어지고 이후 재사용된다
//! let loan_repo = services.loan_repo().await?;
//! loan_repo.create(&loan).await?;
//! ```

use std::sync::Arc;

use log::info;
use tokio::sync::OnceCell;

use crate::config::store_config::StoreConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::repositories::loans::{CosmosLoanRepository, LoanRepository};

/// 애플리케이션 전역 의존성 컨테이너
pub struct AppServices {
    config: StoreConfig,
    loan_repo: OnceCell<Arc<CosmosLoanRepository>>,
}

impl AppServices {
    /// 환경 변수 기반 설정으로 컨테이너를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - 필수 자격 증명이 누락된 경우.
    ///   지연 없이 이 시점에 바로 드러납니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    /// 명시적 설정으로 컨테이너를 구성합니다.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            loan_repo: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// 대여 리포지토리 핸들을 반환합니다.
    ///
    /// 첫 호출에서 저장소 연결과 어댑터를 구성하고, 이후 호출은
    /// 캐시된 동일 인스턴스를 반환합니다. 동시 첫 사용에도 초기화는
    /// 한 번만 수행됩니다.
    ///
    /// # Errors
    ///
    /// * `DatabaseError` - 첫 구성 시 저장소 연결에 실패한 경우
    pub async fn loan_repo(&self) -> AppResult<Arc<dyn LoanRepository>> {
        let repo = self
            .loan_repo
            .get_or_try_init(|| async {
                info!("📡 대여 리포지토리 구성 중: {}", self.config.database_id());
                let database = Arc::new(Database::connect(&self.config).await?);
                Ok::<_, AppError>(Arc::new(CosmosLoanRepository::new(database)))
            })
            .await?;

        Ok(Arc::clone(repo) as Arc<dyn LoanRepository>)
    }
}

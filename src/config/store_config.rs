//! # 저장소 설정 모듈
//!
//! 문서 저장소(Azure Cosmos DB, MongoDB API) 접속 설정을 관리합니다.
//! 계정 엔드포인트, 데이터베이스 ID, 컨테이너 ID는 컴파일 타임
//! 상수이며, 접근 키만 환경 변수로 주입받습니다.
//!
//! # 환경 변수
//!
//! ```bash
//! # Cosmos DB 계정 접근 키 (필수)
//! export COSMOS_KEY="base64-encoded-account-key"
//! ```

use std::env;
use std::fmt;

use dotenv::dotenv;

use crate::core::errors::{AppError, AppResult};

/// Cosmos DB 계정 이름
pub const COSMOS_ACCOUNT: &str = "loan-dev-vilius";

/// MongoDB API 엔드포인트 호스트
pub const COSMOS_HOST: &str = "loan-dev-vilius.mongo.cosmos.azure.com";

/// MongoDB API 포트
pub const COSMOS_PORT: u16 = 10255;

/// 논리 데이터베이스 ID
pub const DATABASE_ID: &str = "loan-db";

/// 대여 문서 컨테이너(컬렉션) ID
pub const CONTAINER_ID: &str = "loans";

/// 접근 키를 공급하는 환경 변수 이름
pub const COSMOS_KEY_VAR: &str = "COSMOS_KEY";

/// 문서 저장소 접속 설정
///
/// 프로세스 시작 시 한 번 생성하여 [`crate::config::AppServices`]에
/// 넘기는 명시적 설정 객체입니다. 접근 키가 없으면 생성 자체가
/// 실패하므로, 자격 증명 누락이 가장 이른 시점에 드러납니다.
#[derive(Clone)]
pub struct StoreConfig {
    key: String,
}

impl StoreConfig {
    /// 환경 변수에서 설정을 구성합니다.
    ///
    /// `.env` 파일이 있으면 먼저 로드한 뒤 `COSMOS_KEY`를 읽습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - `COSMOS_KEY`가 없거나 비어 있는 경우
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok();
        Self::from_parts(env::var(COSMOS_KEY_VAR).ok())
    }

    /// 주어진 키 값으로 설정을 구성합니다.
    ///
    /// 환경 변수를 건드리지 않고 검증 로직을 테스트할 수 있도록
    /// 분리된 생성 경로입니다.
    pub fn from_parts(key: Option<String>) -> AppResult<Self> {
        match key {
            Some(k) if !k.trim().is_empty() => Ok(Self { key: k }),
            _ => Err(AppError::ConfigurationError(format!(
                "필수 환경 변수가 설정되지 않았습니다: {}",
                COSMOS_KEY_VAR
            ))),
        }
    }

    pub fn database_id(&self) -> &'static str {
        DATABASE_ID
    }

    pub fn container_id(&self) -> &'static str {
        CONTAINER_ID
    }

    /// MongoDB API 접속 URI를 렌더링합니다.
    ///
    /// 접근 키는 base64 문자열이라 `+`, `/`, `=`를 포함할 수 있으므로
    /// userinfo 구간에 넣기 전에 퍼센트 인코딩합니다.
    pub fn connection_uri(&self) -> String {
        format!(
            "mongodb://{account}:{key}@{host}:{port}/?ssl=true&retrywrites=false&maxIdleTimeMS=120000&appName=@{account}@",
            account = COSMOS_ACCOUNT,
            key = urlencoding::encode(&self.key),
            host = COSMOS_HOST,
            port = COSMOS_PORT,
        )
    }
}

impl fmt::Debug for StoreConfig {
    // 접근 키가 로그에 남지 않도록 가린다
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("account", &COSMOS_ACCOUNT)
            .field("database_id", &DATABASE_ID)
            .field("container_id", &CONTAINER_ID)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_a_configuration_error() {
        let err = StoreConfig::from_parts(None).unwrap_err();
        match err {
            AppError::ConfigurationError(msg) => assert!(msg.contains(COSMOS_KEY_VAR)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_key_is_a_configuration_error() {
        assert!(StoreConfig::from_parts(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_connection_uri_embeds_encoded_key() {
        let config = StoreConfig::from_parts(Some("abc+def/ghi==".to_string())).unwrap();
        let uri = config.connection_uri();

        assert!(uri.starts_with("mongodb://loan-dev-vilius:"));
        assert!(uri.contains("abc%2Bdef%2Fghi%3D%3D"));
        assert!(uri.contains("loan-dev-vilius.mongo.cosmos.azure.com:10255"));
        assert!(uri.contains("ssl=true"));
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let config = StoreConfig::from_parts(Some("top-secret".to_string())).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

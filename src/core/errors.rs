//! # Application Error Handling
//!
//! 서비스 전역에서 사용하는 통합 에러 타입을 정의합니다.
//! `thiserror` 크레이트로 `Error` trait 구현을 자동화하고,
//! 발생 계층별로 의미가 분명한 변형(variant)으로 분류합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 지점 | 재시도 가능 여부 |
//! |------|-----------|------------------|
//! | `ValidationError` | 엔티티 팩토리의 입력 검증 | 입력 수정 전까지 불가 |
//! | `ConfigurationError` | 설정/자격 증명 로딩 | 환경 설정 수정 전까지 불가 |
//! | `NotFound` | 교체 대상 문서 없음 | 대상 확인 후 |
//! | `ConflictError` | 중복 키 삽입 | ID 변경 후 |
//! | `DatabaseError` | 그 외 모든 저장소 오류 | 호출자 판단 |
//!
//! 검증/설정 에러는 절대 삼키지 않습니다. 저장소 에러 중 유일하게
//! 특별 취급되는 조건은 단건 조회의 not-found이며, 이는 에러가 아닌
//! `Ok(None)`으로 변환됩니다 (`CosmosLoanRepository::get_by_id` 참고).
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn check_price(price: f64) -> AppResult<f64> {
//!     if !price.is_finite() || price < 0.0 {
//!         return Err(AppError::ValidationError(
//!             "가격은 0 이상의 유한한 숫자여야 합니다".to_string(),
//!         ));
//!     }
//!     Ok(price)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 도메인 팩토리, 설정 로딩, 저장소 어댑터에서 발생하는 모든 에러를
/// 포괄합니다. 메시지는 위반된 필드/규칙 또는 실패한 연산을 명시합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패
    ///
    /// 엔티티 팩토리에서 동기적으로 발생하며, 메시지가 위반된
    /// 필드와 규칙을 명시합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필수 설정 누락
    ///
    /// 저장소 자격 증명 등 필수 환경 변수가 없을 때 발생합니다.
    /// 환경 설정을 고치기 전에는 재시도해도 의미가 없습니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 대상 문서 없음
    ///
    /// 전체 교체(update) 대상 문서가 존재하지 않는 경우입니다.
    /// 단건 조회의 not-found는 에러가 아니라 `Ok(None)`입니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 키 충돌
    ///
    /// 이미 존재하는 ID로 문서를 삽입하려는 경우입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 저장소 오류
    ///
    /// not-found 단건 조회를 제외한 모든 원격 저장소 실패를
    /// 그대로 전달합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = AppError::ValidationError("장비명은 2자 이상이어야 합니다".to_string());
        assert_eq!(
            error.to_string(),
            "Validation error: 장비명은 2자 이상이어야 합니다"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let error = AppError::ConfigurationError("COSMOS_KEY 누락".to_string());
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_not_found_error_display() {
        let error = AppError::NotFound("loan-123".to_string());
        assert_eq!(error.to_string(), "Not found: loan-123");
    }

    #[test]
    fn test_conflict_error_display() {
        let error = AppError::ConflictError("loan-123".to_string());
        assert!(error.to_string().contains("Conflict"));
    }
}

//! # 문자열 유틸리티
//!
//! 엔티티 팩토리의 입력 정규화에 사용되는 문자열 처리 함수들입니다.

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이거나 공백만 있는 경우 `ValidationError`를 반환하고,
/// 유효한 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 에러 메시지에 사용할 필드명
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 비어 있지 않은 문자열이어야 합니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// 값이 없거나 공백뿐이면 `None`, 유효하면 앞뒤 공백을 제거한
/// 문자열을 `Some`으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

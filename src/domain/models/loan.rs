//! # 대여(Loan) 도메인 모델
//!
//! 장비 대여 건을 표현하는 핵심 엔티티입니다.
//! 대여 신청은 [`Loan::create`] 팩토리를 통해서만 생성되며,
//! 생성된 엔티티는 불변 값 객체로 취급됩니다. 상태 변경이 필요한
//! 경우 기존 값을 수정하는 대신 새 값을 만들어 반환합니다
//! ([`Loan::with_status`]).
//!
//! ## 검증 규칙
//!
//! - `borrower_name`: 2자 이상 100자 이하
//! - `device`: 2자 이상 100자 이하
//! - `status`: pending / approved / rejected / closed 중 하나 (기본값 pending)
//!
//! 검증은 선언된 필드 순서대로 진행되며 첫 번째로 실패한 규칙이
//! 에러로 반환됩니다. 문자열 길이 검증이 상태 열거값 검증보다
//! 먼저 수행됩니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::clean_optional_string;

/// 대여 건의 만료 시한 (생성 시각 기준)
pub const LOAN_TTL_HOURS: i64 = 48;

/// 첫 실패 우선 검증에서 필드를 확인하는 순서
const FIELD_CHECK_ORDER: [&str; 2] = ["borrower_name", "device"];

/// 대여 상태
///
/// 저장 문서에는 소문자 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// 승인 대기
    Pending,
    /// 승인됨
    Approved,
    /// 거절됨
    Rejected,
    /// 종료됨 (반납 완료 또는 만료)
    Closed,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
            LoanStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LoanStatus::Pending),
            "approved" => Ok(LoanStatus::Approved),
            "rejected" => Ok(LoanStatus::Rejected),
            "closed" => Ok(LoanStatus::Closed),
            other => Err(AppError::ValidationError(format!(
                "유효하지 않은 대여 상태입니다: {}",
                other
            ))),
        }
    }
}

/// 대여 생성 팩토리 입력
///
/// JSON 경계에서는 camelCase 필드명을 사용합니다. `id`와 `status`는
/// 선택적이며, 누락 시 각각 UUID 생성과 `pending` 기본값이 적용됩니다.
///
/// # JSON 예제
///
/// ```json
/// { "borrowerName": "김지훈", "device": "MacBook Pro 14", "status": "pending" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoanParams {
    /// 대여 건 식별자. 없거나 공백이면 자동 생성됩니다.
    pub id: Option<String>,

    #[validate(length(
        min = 2,
        max = 100,
        message = "대여자 이름은 2자 이상 100자 이하여야 합니다"
    ))]
    pub borrower_name: String,

    #[validate(length(
        min = 2,
        max = 100,
        message = "장비명은 2자 이상 100자 이하여야 합니다"
    ))]
    pub device: String,

    /// 대여 상태 문자열. 누락 시 `pending`으로 시작합니다.
    pub status: Option<String>,
}

/// 대여 엔티티
///
/// 생성 이후 변경할 수 없는 값 객체입니다. `expires_at`은 항상
/// `created_at`으로부터 정확히 48시간 뒤입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    id: String,
    borrower_name: String,
    device: String,
    status: LoanStatus,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Loan {
    /// 입력을 검증하고 대여 엔티티를 생성합니다.
    ///
    /// 부수 효과는 시스템 시계 조회와 ID 생성을 위한 난수원
    /// 접근뿐입니다.
    ///
    /// # 생성 규칙
    ///
    /// - `id` 누락/공백 시 UUID v4를 생성합니다
    /// - `status` 누락 시 `pending`으로 시작합니다
    /// - `created_at`은 현재 시각, `expires_at`은 정확히 48시간 뒤입니다
    pub fn create(params: LoanParams) -> AppResult<Self> {
        params.validate().map_err(|e| first_violation(&e))?;

        let status = match params.status.as_deref() {
            Some(raw) => raw.parse::<LoanStatus>()?,
            None => LoanStatus::Pending,
        };

        let id = clean_optional_string(params.id).unwrap_or_else(|| Uuid::new_v4().to_string());

        let created_at = Utc::now();
        let expires_at = created_at + Duration::hours(LOAN_TTL_HOURS);

        Ok(Self {
            id,
            borrower_name: params.borrower_name,
            device: params.device,
            status,
            created_at,
            expires_at,
        })
    }

    /// 저장소 문서로부터 엔티티를 복원합니다.
    ///
    /// 저장 시점에 이미 검증된 값이므로 재검증하지 않습니다.
    pub(crate) fn restore(
        id: String,
        borrower_name: String,
        device: String,
        status: LoanStatus,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            borrower_name,
            device,
            status,
            created_at,
            expires_at,
        }
    }

    /// 상태만 바뀐 새 대여 값을 반환합니다.
    ///
    /// 원본 엔티티는 변경되지 않습니다. 변경된 값의 영속화는
    /// 저장소의 `update`(전체 교체) 호출로 수행합니다.
    pub fn with_status(&self, status: LoanStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// 주어진 시각 기준으로 대여 건이 만료되었는지 확인합니다.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn borrower_name(&self) -> &str {
        &self.borrower_name
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// 검증 결과에서 선언 순서상 가장 앞선 위반을 꺼냅니다.
///
/// `validator`는 위반을 필드별 맵으로 모아 반환하므로, 순서를
/// 고정하기 위해 [`FIELD_CHECK_ORDER`]를 기준으로 첫 위반을
/// 선택합니다.
fn first_violation(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    for field in FIELD_CHECK_ORDER {
        if let Some(violations) = field_errors.get(field) {
            if let Some(violation) = violations.first() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} 필드가 유효하지 않습니다", field));
                return AppError::ValidationError(message);
            }
        }
    }
    AppError::ValidationError(errors.to_string())
}

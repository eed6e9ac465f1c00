//! # 대여 저장 문서 DTO
//!
//! 영속화 경계에서만 사용하는 평평한(flat) 문서 표현입니다.
//! 필드명은 저장 문서의 camelCase 명명을 그대로 따르며, 대여 ID는
//! 드라이버의 기본 키인 `_id`로 기록되어 저장소의 유니크 제약이
//! 중복 삽입을 막고 단건 조회가 기본 키를 직접 조준하게 합니다.
//!
//! 엔티티와 문서 간 변환은 무손실이며 양방향입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::loan::{Loan, LoanStatus};

/// 영속화용 대여 문서
///
/// 저장 형태: `{ _id, borrowerName, device, status, createdAt, expiresAt }`.
/// 타임스탬프는 ISO-8601 문자열, 상태는 소문자 열거 문자열로
/// 직렬화됩니다. 이 외의 필드는 읽지도 쓰지도 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub borrower_name: String,
    pub device: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&Loan> for LoanDocument {
    fn from(loan: &Loan) -> Self {
        Self {
            id: loan.id().to_string(),
            borrower_name: loan.borrower_name().to_string(),
            device: loan.device().to_string(),
            status: loan.status(),
            created_at: loan.created_at(),
            expires_at: loan.expires_at(),
        }
    }
}

impl From<LoanDocument> for Loan {
    fn from(doc: LoanDocument) -> Self {
        Loan::restore(
            doc.id,
            doc.borrower_name,
            doc.device,
            doc.status,
            doc.created_at,
            doc.expires_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::loan::LoanParams;

    fn sample_loan() -> Loan {
        Loan::create(LoanParams {
            id: Some("loan-2024-042".to_string()),
            borrower_name: "박서연".to_string(),
            device: "ThinkPad X1".to_string(),
            status: Some("approved".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let loan = sample_loan();
        let document = LoanDocument::from(&loan);
        let restored = Loan::from(document);

        assert_eq!(restored, loan);
    }

    #[test]
    fn test_document_shape_matches_store_contract() {
        let document = LoanDocument::from(&sample_loan());
        let value = serde_json::to_value(&document).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["_id", "borrowerName", "createdAt", "device", "expiresAt", "status"]
        );

        assert_eq!(object["_id"], "loan-2024-042");
        assert_eq!(object["status"], "approved");
        assert!(object["createdAt"].is_string());
        assert!(object["expiresAt"].is_string());
    }
}

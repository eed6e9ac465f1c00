//! # 대여 리포지토리 계약
//!
//! 영속화 백엔드에 무관하게 대여 엔티티의 저장/조회를 추상화하는
//! 트레이트입니다. 나머지 계층은 이 계약에만 의존하며, 구체 구현은
//! [`CosmosLoanRepository`](super::cosmos_loan_repository::CosmosLoanRepository)가
//! 제공합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::models::loan::Loan;

/// 대여 엔티티 영속화 계약
///
/// 모든 연산은 원격 저장소에 대한 단발성 비동기 호출입니다.
/// 타임아웃과 취소는 하부 드라이버에 위임합니다.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// 새 대여 문서를 삽입합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 동일한 ID의 문서가 이미 존재하는 경우
    /// * `DatabaseError` - 그 외 쓰기 실패
    async fn create(&self, loan: &Loan) -> AppResult<()>;

    /// ID로 대여 건을 단건 조회합니다.
    ///
    /// 문서가 없는 경우는 에러가 아니라 `Ok(None)`입니다.
    /// 그 외 저장소 오류는 `DatabaseError`로 전달됩니다.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Loan>>;

    /// 저장된 모든 대여 건을 반환합니다.
    ///
    /// 저장소는 순서를 보장하지 않으므로 호출자는 특정 순서를
    /// 가정해서는 안 됩니다.
    async fn list(&self) -> AppResult<Vec<Loan>>;

    /// `loan.id()`에 해당하는 문서를 전체 교체합니다.
    ///
    /// 부분 병합이 아닌 전체 교체입니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 대상 문서가 존재하지 않는 경우
    /// * `DatabaseError` - 그 외 쓰기 실패
    async fn update(&self, loan: &Loan) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::dto::loans::LoanDocument;
    use crate::domain::models::loan::{LoanParams, LoanStatus};

    /// 계약 의미론 검증용 인메모리 구현
    struct InMemoryLoanRepository {
        documents: Mutex<HashMap<String, LoanDocument>>,
    }

    impl InMemoryLoanRepository {
        fn new() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl LoanRepository for InMemoryLoanRepository {
        async fn create(&self, loan: &Loan) -> AppResult<()> {
            let mut documents = self.documents.lock().unwrap();
            if documents.contains_key(loan.id()) {
                return Err(AppError::ConflictError(format!(
                    "이미 존재하는 대여 ID입니다: {}",
                    loan.id()
                )));
            }
            documents.insert(loan.id().to_string(), LoanDocument::from(loan));
            Ok(())
        }

        async fn get_by_id(&self, id: &str) -> AppResult<Option<Loan>> {
            let documents = self.documents.lock().unwrap();
            Ok(documents.get(id).cloned().map(Loan::from))
        }

        async fn list(&self) -> AppResult<Vec<Loan>> {
            let documents = self.documents.lock().unwrap();
            Ok(documents.values().cloned().map(Loan::from).collect())
        }

        async fn update(&self, loan: &Loan) -> AppResult<()> {
            let mut documents = self.documents.lock().unwrap();
            if !documents.contains_key(loan.id()) {
                return Err(AppError::NotFound(format!(
                    "교체할 대여 문서가 없습니다: {}",
                    loan.id()
                )));
            }
            documents.insert(loan.id().to_string(), LoanDocument::from(loan));
            Ok(())
        }
    }

    fn repository() -> Arc<dyn LoanRepository> {
        Arc::new(InMemoryLoanRepository::new())
    }

    fn sample_loan(id: &str) -> Loan {
        Loan::create(LoanParams {
            id: Some(id.to_string()),
            borrower_name: "박서연".to_string(),
            device: "ThinkPad X1".to_string(),
            status: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_loan_is_readable_by_id() {
        let repo = repository();
        let loan = sample_loan("loan-001");

        repo.create(&loan).await.unwrap();
        let found = repo.get_by_id("loan-001").await.unwrap();

        assert_eq!(found, Some(loan));
    }

    #[tokio::test]
    async fn test_get_by_id_on_missing_document_is_none_not_error() {
        let repo = repository();

        let found = repo.get_by_id("no-such-loan").await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let repo = repository();
        let loan = sample_loan("loan-001");

        repo.create(&loan).await.unwrap();
        let err = repo.create(&loan).await.unwrap_err();

        match err {
            AppError::ConflictError(msg) => assert!(msg.contains("loan-001")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_on_missing_document_is_not_found() {
        let repo = repository();

        let err = repo.update(&sample_loan("loan-404")).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains("loan-404")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_fully_overwrites_existing_document() {
        let repo = repository();
        let loan = sample_loan("loan-001");
        repo.create(&loan).await.unwrap();

        let approved = loan.with_status(LoanStatus::Approved);
        repo.update(&approved).await.unwrap();

        let stored = repo.get_by_id("loan-001").await.unwrap().unwrap();
        assert_eq!(stored, approved);
        assert_eq!(stored.status(), LoanStatus::Approved);
    }

    #[tokio::test]
    async fn test_list_returns_every_stored_loan() {
        let repo = repository();
        let first = sample_loan("loan-001");
        let second = sample_loan("loan-002");

        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let mut ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|l| l.id().to_string())
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["loan-001", "loan-002"]);
    }
}

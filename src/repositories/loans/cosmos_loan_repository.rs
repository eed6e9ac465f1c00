//! # Cosmos DB 대여 리포지토리 구현
//!
//! [`LoanRepository`] 계약의 문서 저장소 어댑터입니다.
//! Azure Cosmos DB 계정의 MongoDB 호환 API를 대상으로 하며,
//! 엔티티와 저장 문서([`LoanDocument`]) 간 변환을 담당합니다.
//!
//! ## 키 전략
//!
//! 대여 ID가 문서의 기본 키(`_id`)입니다. 저장소의 유니크 제약이
//! 중복 삽입을 `ConflictError`로 만들고, 단건 조회와 전체 교체는
//! 기본 키를 직접 조준합니다.
//!
//! ## 에러 처리
//!
//! - 단건 조회에서 문서가 없는 경우만 `Ok(None)`으로 변환합니다
//! - 중복 키 쓰기 오류(코드 11000)는 `ConflictError`로 분류합니다
//! - 그 외 모든 저장소 오류는 `DatabaseError`로 그대로 전달합니다

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};

use crate::config::store_config::CONTAINER_ID;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::loans::LoanDocument;
use crate::domain::models::loan::Loan;

use super::loan_repository::LoanRepository;

/// MongoDB 중복 키 쓰기 오류 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 문서 저장소 기반 대여 리포지토리
pub struct CosmosLoanRepository {
    /// 공유 데이터베이스 연결
    db: Arc<Database>,
    /// 대여 문서 컨테이너 이름
    collection_name: &'static str,
}

impl CosmosLoanRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            collection_name: CONTAINER_ID,
        }
    }

    fn collection(&self) -> mongodb::Collection<LoanDocument> {
        self.db.collection(self.collection_name)
    }

    fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
        matches!(
            error.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE
        )
    }
}

#[async_trait]
impl LoanRepository for CosmosLoanRepository {
    async fn create(&self, loan: &Loan) -> AppResult<()> {
        let document = LoanDocument::from(loan);

        self.collection().insert_one(&document).await.map_err(|e| {
            if Self::is_duplicate_key(&e) {
                AppError::ConflictError(format!("이미 존재하는 대여 ID입니다: {}", loan.id()))
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Loan>> {
        // 드라이버는 일치 문서가 없으면 에러가 아니라 None을 돌려준다
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.map(Loan::from))
    }

    async fn list(&self) -> AppResult<Vec<Loan>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<LoanDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(Loan::from).collect())
    }

    async fn update(&self, loan: &Loan) -> AppResult<()> {
        let document = LoanDocument::from(loan);

        let result = self
            .collection()
            .replace_one(doc! { "_id": loan.id() }, &document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "교체할 대여 문서가 없습니다: {}",
                loan.id()
            )));
        }

        Ok(())
    }
}

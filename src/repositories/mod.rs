//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인 계층은 리포지토리 트레이트에만 의존하고, 구체 저장소
//! 구현은 어댑터가 담당합니다.

pub mod loans;

pub use loans::{CosmosLoanRepository, LoanRepository};

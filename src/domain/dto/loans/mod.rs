//! 대여 관련 DTO

pub mod loan_document;

pub use loan_document::LoanDocument;

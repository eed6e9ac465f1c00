//! # 상품(Product) 도메인 모델
//!
//! 상품 엔티티와 검증 팩토리를 정의합니다.
//! 엔티티는 생성 이후 변경할 수 없는 값 객체이며, 모든 생성은
//! [`Product::create`] 팩토리를 통해서만 이루어집니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

/// 상품 엔티티
///
/// 불변 값 객체입니다. 필드는 비공개이며 읽기 접근자만 제공합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    category: Option<String>,
}

/// 상품 생성 팩토리 입력
///
/// 반정형 입력(JSON 등)을 그대로 받을 수 있도록 모든 필드가
/// 선택적입니다. 누락/무효 여부는 [`Product::create`]에서 검증합니다.
///
/// # JSON 예제
///
/// ```json
/// { "id": "prd-001", "name": "USB-C 도킹 스테이션", "price": 129000, "category": "주변기기" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl Product {
    /// 입력을 검증하고 상품 엔티티를 생성합니다.
    ///
    /// 검증은 한 번에 하나씩, 선언 순서대로 수행되며 첫 번째로
    /// 실패한 규칙이 에러로 반환됩니다.
    ///
    /// # 검증 규칙
    ///
    /// 1. `id` - 비어 있지 않은 문자열
    /// 2. `name` - 비어 있지 않은 문자열
    /// 3. `price` - 0 이상의 유한한 숫자
    ///
    /// `category`는 공백뿐이거나 없으면 부재로 정규화됩니다.
    pub fn create(input: ProductInput) -> AppResult<Self> {
        let id = validate_required_string(input.id.as_deref().unwrap_or(""), "상품 ID")?;
        let name = validate_required_string(input.name.as_deref().unwrap_or(""), "상품 이름")?;

        let price = match input.price {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            _ => {
                return Err(AppError::ValidationError(
                    "상품 가격은 0 이상의 유한한 숫자여야 합니다".to_string(),
                ));
            }
        };

        let category = clean_optional_string(input.category);

        Ok(Self {
            id,
            name,
            price,
            category,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

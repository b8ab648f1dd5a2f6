//! Catalog domain models.

use chrono::{DateTime, Utc};

use crate::model::{
    api::{CodeDto, CODE_FIRST_KIND},
    product::{BrandDto, CategoryDto, CreateProductDto, ProductDetailDto, ProductDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub price: i64,
    pub amount: i64,
    pub title_image: String,
    pub description_asset: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            brand_id: entity.brand_id,
            name: entity.name,
            price: entity.price,
            amount: entity.amount,
            title_image: entity.title_image,
            description_asset: entity.description_asset,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            brand_id: self.brand_id,
            name: self.name,
            price: self.price,
            amount: self.amount,
            title_image: self.title_image,
            description_asset: self.description_asset,
            created_at: self.created_at,
        }
    }
}

/// Product with its brand name and category list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub brand_name: String,
    pub categories: Vec<Category>,
}

impl ProductDetail {
    pub fn into_dto(self) -> ProductDetailDto {
        ProductDetailDto {
            product: self.product.into_dto(),
            brand_name: self.brand_name,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
        }
    }
}

/// One page of products, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Zero-based index of the last page: `max(total - 1, 0) / page_size`.
    pub max_page: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct GetProductsParam {
    pub page: u64,
    pub page_size: u64,
    /// `0` lists every category.
    pub category_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub brand_id: i32,
    pub name: String,
    pub price: i64,
    pub amount: i64,
    pub title_image: String,
    pub description_asset: String,
    pub category_ids: Vec<i32>,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            brand_id: dto.brand_id,
            name: dto.name,
            price: dto.price,
            amount: dto.amount,
            title_image: dto.title_image,
            description_asset: dto.description_asset,
            category_ids: dto.category_ids,
        }
    }
}

/// Outcome of listing a new product.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateProductResult {
    Created(Product),
    /// Nothing written; the brand does not exist or belongs to another user.
    BrandNotOwned,
}

impl CreateProductResult {
    pub fn into_dto(self) -> CodeDto {
        match self {
            Self::Created(product) => CodeDto::created(product.id),
            Self::BrandNotOwned => CodeDto::code(CODE_FIRST_KIND),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl Brand {
    pub fn from_entity(entity: entity::brand::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

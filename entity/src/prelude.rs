pub use super::brand::Entity as Brand;
pub use super::cart::Entity as Cart;
pub use super::category::Entity as Category;
pub use super::pbv_option::Entity as PbvOption;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::product_statistics::Entity as ProductStatistics;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;

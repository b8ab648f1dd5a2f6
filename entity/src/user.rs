use sea_orm::entity::prelude::*;

/// Registered account. `nickname` and `username` are unique across all users.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    #[sea_orm(unique)]
    pub nickname: String,
    #[sea_orm(unique)]
    pub username: String,
    /// Hex encoded salted SHA-256 of the password.
    pub password: String,
    pub salt: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brand::Entity")]
    Brand,
    #[sea_orm(has_many = "super::cart::Entity")]
    Cart,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_one = "super::pbv_option::Entity")]
    PbvOption,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::pbv_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PbvOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

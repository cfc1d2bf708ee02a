use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i32,
    pub category: String,
    pub name: String,
    pub description: String,
    pub subcategory: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Double")]
    pub avg_rating: f64,
    pub num_ratings: i32,
    #[sea_orm(column_type = "Double")]
    pub popular: f64,
    #[sea_orm(column_type = "Double")]
    pub new_arrival: f64,
    #[sea_orm(column_type = "Double")]
    pub on_sale: f64,
    pub arrival_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::interactions::Entity")]
    Interactions,
    #[sea_orm(has_many = "super::neg_interactions::Entity")]
    NegInteractions,
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
    }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::interactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interactions.def()
    }
}

impl Related<super::neg_interactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NegInteractions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

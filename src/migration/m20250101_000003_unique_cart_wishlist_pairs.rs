//! One cart row and one wishlist row per (user, product).
//!
//! Duplicate pairs left by earlier writers are collapsed to their newest row
//! before the unique indexes are built.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CartItems {
    Table,
    UserId,
    ProductId,
}

#[derive(DeriveIden)]
enum Wishlist {
    Table,
    UserId,
    ProductId,
}

const CART_PAIR_INDEX: &str = "ux_cart_items_user_product";
const WISHLIST_PAIR_INDEX: &str = "ux_wishlist_user_product";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for table in ["cart_items", "wishlist"] {
            db.execute_unprepared(&format!(
                "DELETE FROM {table} a USING {table} b \
                 WHERE a.user_id = b.user_id AND a.product_id = b.product_id AND a.id < b.id"
            ))
            .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name(CART_PAIR_INDEX)
                    .table(CartItems::Table)
                    .col(CartItems::UserId)
                    .col(CartItems::ProductId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(WISHLIST_PAIR_INDEX)
                    .table(Wishlist::Table)
                    .col(Wishlist::UserId)
                    .col(Wishlist::ProductId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(WISHLIST_PAIR_INDEX).if_exists().to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(CART_PAIR_INDEX).if_exists().to_owned())
            .await
    }
}

//! The nine commerce tables.
//!
//! Table, column and index names match the tables the recommendation jobs
//! already read, so they must not be renamed. Every foreign key restricts
//! deletes of the parent row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    Email,
    Age,
    Gender,
    SignupDate,
    Preferences,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ItemId,
    Category,
    Name,
    Description,
    Subcategory,
    Price,
    AvgRating,
    NumRatings,
    Popular,
    NewArrival,
    OnSale,
    ArrivalDate,
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    Id,
    UserId,
    ProductId,
    Rating,
    Comment,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    UserId,
    ProductId,
    Quantity,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
    UserId,
    TotalAmount,
    OrderDate,
    Status,
}

#[derive(DeriveIden)]
enum Wishlist {
    Table,
    Id,
    UserId,
    ProductId,
}

#[derive(DeriveIden)]
enum Logins {
    Table,
    Id,
    UserId,
    Email,
    HashedPassword,
}

#[derive(DeriveIden)]
enum Interactions {
    Table,
    Id,
    UserId,
    ProductId,
    Rating,
    Quantity,
}

#[derive(DeriveIden)]
enum NegInteractions {
    Table,
    Id,
    UserId,
    ProductId,
    Rating,
}

fn serial_pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn user_fk<T: IntoTableRef, C: IntoIden>(
    table: T,
    col: C,
    name: &str,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Users::Table, Users::UserId)
        .on_delete(ForeignKeyAction::Restrict)
        .to_owned()
}

fn product_fk<T: IntoTableRef, C: IntoIden>(
    table: T,
    col: C,
    name: &str,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Products::Table, Products::ItemId)
        .on_delete(ForeignKeyAction::Restrict)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Users::UserId))
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Age).integer().not_null())
                    .col(ColumnDef::new(Users::Gender).string().not_null())
                    .col(ColumnDef::new(Users::SignupDate).date().not_null())
                    .col(ColumnDef::new(Users::Preferences).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_users_user_id")
                    .table(Users::Table)
                    .col(Users::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Products::ItemId))
                    .col(ColumnDef::new(Products::Category).string().not_null())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Description).string().not_null())
                    .col(ColumnDef::new(Products::Subcategory).string().not_null())
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .col(ColumnDef::new(Products::AvgRating).double().not_null())
                    .col(ColumnDef::new(Products::NumRatings).integer().not_null())
                    .col(ColumnDef::new(Products::Popular).double().not_null())
                    .col(ColumnDef::new(Products::NewArrival).double().not_null())
                    .col(ColumnDef::new(Products::OnSale).double().not_null())
                    .col(ColumnDef::new(Products::ArrivalDate).date().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_products_item_id")
                    .table(Products::Table)
                    .col(Products::ItemId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Feedback::Id))
                    .col(ColumnDef::new(Feedback::UserId).integer().not_null())
                    .col(ColumnDef::new(Feedback::ProductId).integer().not_null())
                    .col(ColumnDef::new(Feedback::Rating).double().not_null())
                    .col(ColumnDef::new(Feedback::Comment).string().null())
                    .foreign_key(&mut user_fk(
                        Feedback::Table,
                        Feedback::UserId,
                        "feedback_user_id_fkey",
                    ))
                    .foreign_key(&mut product_fk(
                        Feedback::Table,
                        Feedback::ProductId,
                        "feedback_product_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(CartItems::Id))
                    .col(ColumnDef::new(CartItems::UserId).integer().not_null())
                    .col(ColumnDef::new(CartItems::ProductId).integer().not_null())
                    .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                    .foreign_key(&mut user_fk(
                        CartItems::Table,
                        CartItems::UserId,
                        "cart_items_user_id_fkey",
                    ))
                    .foreign_key(&mut product_fk(
                        CartItems::Table,
                        CartItems::ProductId,
                        "cart_items_product_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Orders::OrderId))
                    .col(ColumnDef::new(Orders::UserId).integer().not_null())
                    .col(ColumnDef::new(Orders::TotalAmount).double().not_null())
                    .col(ColumnDef::new(Orders::OrderDate).timestamp().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .foreign_key(&mut user_fk(
                        Orders::Table,
                        Orders::UserId,
                        "orders_user_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Wishlist::Id))
                    .col(ColumnDef::new(Wishlist::UserId).integer().not_null())
                    .col(ColumnDef::new(Wishlist::ProductId).integer().not_null())
                    .foreign_key(&mut user_fk(
                        Wishlist::Table,
                        Wishlist::UserId,
                        "wishlist_user_id_fkey",
                    ))
                    .foreign_key(&mut product_fk(
                        Wishlist::Table,
                        Wishlist::ProductId,
                        "wishlist_product_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Logins::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Logins::Id))
                    .col(
                        ColumnDef::new(Logins::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Logins::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Logins::HashedPassword).string().not_null())
                    .foreign_key(&mut user_fk(
                        Logins::Table,
                        Logins::UserId,
                        "logins_user_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Interactions::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(Interactions::Id))
                    .col(ColumnDef::new(Interactions::UserId).integer().not_null())
                    .col(ColumnDef::new(Interactions::ProductId).integer().not_null())
                    .col(ColumnDef::new(Interactions::Rating).double().not_null())
                    .col(ColumnDef::new(Interactions::Quantity).integer().not_null())
                    .foreign_key(&mut user_fk(
                        Interactions::Table,
                        Interactions::UserId,
                        "interactions_user_id_fkey",
                    ))
                    .foreign_key(&mut product_fk(
                        Interactions::Table,
                        Interactions::ProductId,
                        "interactions_product_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NegInteractions::Table)
                    .if_not_exists()
                    .col(&mut serial_pk(NegInteractions::Id))
                    .col(ColumnDef::new(NegInteractions::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(NegInteractions::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NegInteractions::Rating).double().not_null())
                    .foreign_key(&mut user_fk(
                        NegInteractions::Table,
                        NegInteractions::UserId,
                        "neg_interactions_user_id_fkey",
                    ))
                    .foreign_key(&mut product_fk(
                        NegInteractions::Table,
                        NegInteractions::ProductId,
                        "neg_interactions_product_id_fkey",
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first; every foreign key restricts.
        let drops = [
            Table::drop().table(NegInteractions::Table).if_exists().to_owned(),
            Table::drop().table(Interactions::Table).if_exists().to_owned(),
            Table::drop().table(Logins::Table).if_exists().to_owned(),
            Table::drop().table(Wishlist::Table).if_exists().to_owned(),
            Table::drop().table(Orders::Table).if_exists().to_owned(),
            Table::drop().table(CartItems::Table).if_exists().to_owned(),
            Table::drop().table(Feedback::Table).if_exists().to_owned(),
            Table::drop().table(Products::Table).if_exists().to_owned(),
            Table::drop().table(Users::Table).if_exists().to_owned(),
        ];
        for stmt in drops {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Achievements::Title).text().not_null())
                    .col(ColumnDef::new(Achievements::Description).text().not_null())
                    // free text ("2023", "Jul 2024"), ordered lexicographically
                    .col(ColumnDef::new(Achievements::Date).text().not_null())
                    .col(
                        ColumnDef::new(Achievements::Category)
                            .text()
                            .not_null()
                            .check(Expr::col(Achievements::Category).is_in([
                                "competition",
                                "certification",
                                "organizing",
                                "academic",
                            ])),
                    )
                    .col(ColumnDef::new(Achievements::Icon).text())
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("clock_timestamp()")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Title,
    Description,
    Date,
    Category,
    Icon,
    CreatedAt,
}

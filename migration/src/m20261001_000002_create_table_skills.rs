use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Skills::Category)
                            .text()
                            .not_null()
                            .check(Expr::col(Skills::Category).is_in([
                                "languages",
                                "web",
                                "database",
                                "tools",
                                "cloud",
                                "crm",
                            ])),
                    )
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(
                        ColumnDef::new(Skills::Level)
                            .text()
                            .not_null()
                            .default("intermediate")
                            .check(Expr::col(Skills::Level).is_in([
                                "beginner",
                                "intermediate",
                                "advanced",
                                "expert",
                            ])),
                    )
                    .col(ColumnDef::new(Skills::Icon).text())
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
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
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Category,
    Name,
    Level,
    Icon,
    CreatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SearchRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SearchRecords::Keyword).string().not_null())
                    .col(
                        ColumnDef::new(SearchRecords::ResultsJson)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SearchRecords::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on created_at for descending sort + pagination
        manager
            .create_index(
                Index::create()
                    .name("idx_search_records_created_at")
                    .table(SearchRecords::Table)
                    .col(SearchRecords::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SearchRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SearchRecords {
    Table,
    Id,
    Keyword,
    ResultsJson,
    CreatedAt,
}

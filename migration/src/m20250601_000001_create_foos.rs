use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Foos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Foos::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // find_by_name lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_foos_name")
                    .table(Foos::Table)
                    .col(Foos::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Foos {
    Table,
    Id,
    Name,
}

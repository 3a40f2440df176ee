use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410190001_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("first_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).string().not_null())
                    // No unique index: duplicate codes are accepted.
                    .col(ColumnDef::new(Alias::new("student_code")).string().not_null())
                    .col(ColumnDef::new(Alias::new("birth_date")).string().not_null())
                    .col(ColumnDef::new(Alias::new("gender")).string_len(1).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}

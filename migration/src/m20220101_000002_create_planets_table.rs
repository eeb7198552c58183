use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .col(
                        ColumnDef::new(Planets::PlanetId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    // name uniqueness is checked in application code, so no
                    // unique index here
                    .col(
                        ColumnDef::new(Planets::PlanetName)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Planets::PlanetType)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Planets::HomeStar)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Planets::Mass)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Planets::Radius)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Planets::Distance)
                            .double()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Planets::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    PlanetId,
    PlanetName,
    PlanetType,
    HomeStar,
    Mass,
    Radius,
    Distance,
}

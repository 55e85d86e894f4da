use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub mood: String,
    pub stress_level: String,
    pub anxiety_level: String,
    pub depression_level: String,
    #[sea_orm(column_type = "Text")]
    pub mood_solution: String,
    #[sea_orm(column_type = "Text")]
    pub stress_solution: String,
    #[sea_orm(column_type = "Text")]
    pub anxiety_solution: String,
    #[sea_orm(column_type = "Text")]
    pub depression_solution: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

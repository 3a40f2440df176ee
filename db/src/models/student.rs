use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::info;
use uuid::Uuid;

/// Represents a student in the `students` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Random v4 UUID assigned on insert. Never reassigned.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Institution-issued code. Not unique.
    pub student_code: String,
    /// `YYYY-MM-DD`, checked lexically only.
    pub birth_date: String,
    pub gender: Gender,
}

/// Gender code stored as a single letter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Gender {
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Male,

    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    Female,

    #[sea_orm(string_value = "O")]
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Other,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A fully validated student, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub student_code: String,
    pub birth_date: String,
    pub gender: Gender,
}

/// Validated partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_code: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
}

impl StudentChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.student_code.is_none()
            && self.birth_date.is_none()
            && self.gender.is_none()
    }
}

impl Model {
    /// Inserts a new student and returns its freshly generated id.
    pub async fn create(db: &DatabaseConnection, student: NewStudent) -> Result<String, DbErr> {
        let id = Uuid::new_v4().to_string();

        let active = ActiveModel {
            id: Set(id.clone()),
            first_name: Set(student.first_name),
            last_name: Set(student.last_name),
            student_code: Set(student.student_code),
            birth_date: Set(student.birth_date),
            gender: Set(student.gender),
        };

        Entity::insert(active).exec_without_returning(db).await?;
        info!(student_id = %id, "Student created");

        Ok(id)
    }

    /// Every stored student, in whatever order the engine returns them.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Applies the present fields of `changes` to the student with `id`.
    ///
    /// Returns `false` when no such student exists. An empty change set only checks
    /// for existence.
    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: &str,
        changes: StudentChanges,
    ) -> Result<bool, DbErr> {
        if changes.is_empty() {
            return Ok(Self::find_by_id(db, id).await?.is_some());
        }

        let active = ActiveModel {
            id: NotSet,
            first_name: changes.first_name.map_or(NotSet, Set),
            last_name: changes.last_name.map_or(NotSet, Set),
            student_code: changes.student_code.map_or(NotSet, Set),
            birth_date: changes.birth_date.map_or(NotSet, Set),
            gender: changes.gender.map_or(NotSet, Set),
        };

        let result = Entity::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        let updated = result.rows_affected > 0;
        if updated {
            info!(student_id = %id, "Student updated");
        }
        Ok(updated)
    }

    /// Removes the student with `id`. Returns `false` when nothing was deleted.
    pub async fn delete_by_id(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            info!(student_id = %id, "Student deleted");
        }
        Ok(deleted)
    }
}

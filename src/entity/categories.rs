use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryOrder, Select, Set};
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Catalog taxonomy node. The parent relation forms a tree; nothing here
/// prevents a category from becoming its own ancestor, callers must.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub parent_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Entity {
    /// Listing default: parent, then sort order, then name.
    pub fn find_ordered() -> Select<Entity> {
        Self::find()
            .order_by_asc(Column::ParentId)
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            let missing_slug = match &self.slug {
                ActiveValue::Set(s) | ActiveValue::Unchanged(s) => s.is_empty(),
                ActiveValue::NotSet => true,
            };
            if missing_slug {
                if let ActiveValue::Set(name) | ActiveValue::Unchanged(name) = &self.name {
                    self.slug = Set(slugify(name, 140));
                }
            }
        }
        self.updated_at = Set(Utc::now().into());
        Ok(self)
    }
}

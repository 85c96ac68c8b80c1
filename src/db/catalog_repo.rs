use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use super::entities::food;
use super::entities::prelude::Food;

/// SELECT-all over any entity. The entity carries the table name and column
/// list, so every read-only enumeration table shares this one query shape.
pub async fn list_all<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
{
    E::find().all(db).await
}

pub async fn find_food_by_item(
    db: &DatabaseConnection,
    item_id: &str,
) -> Result<Vec<food::Model>, DbErr> {
    Food::find()
        .filter(food::Column::ItemId.eq(item_id))
        .all(db)
        .await
}

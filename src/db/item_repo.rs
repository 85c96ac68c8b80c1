use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use super::entities::item;
use super::entities::prelude::Item;

pub async fn create(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    batch: &str,
    company: &str,
) -> Result<item::Model, DbErr> {
    let model = item::ActiveModel {
        itemcode: Set(code.to_string()),
        itemname: Set(name.to_string()),
        batchcode: Set(batch.to_string()),
        coname: Set(company.to_string()),
    };
    model.insert(db).await
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<item::Model>, DbErr> {
    Item::find().all(db).await
}

pub async fn find_by_code(db: &DatabaseConnection, code: &str) -> Result<Vec<item::Model>, DbErr> {
    Item::find()
        .filter(item::Column::Itemcode.eq(code))
        .all(db)
        .await
}

pub async fn rename(db: &DatabaseConnection, code: &str, name: &str) -> Result<u64, DbErr> {
    let result = Item::update_many()
        .col_expr(item::Column::Itemname, Expr::value(name))
        .filter(item::Column::Itemcode.eq(code))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn set_company(db: &DatabaseConnection, code: &str, company: &str) -> Result<u64, DbErr> {
    let result = Item::update_many()
        .col_expr(item::Column::Coname, Expr::value(company))
        .filter(item::Column::Itemcode.eq(code))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete(db: &DatabaseConnection, code: &str) -> Result<u64, DbErr> {
    let result = Item::delete_many()
        .filter(item::Column::Itemcode.eq(code))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

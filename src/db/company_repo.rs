use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use super::entities::company;
use super::entities::prelude::Company;

pub async fn create(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    city: &str,
) -> Result<company::Model, DbErr> {
    let model = company::ActiveModel {
        company_id: Set(id),
        company_name: Set(name.to_string()),
        company_city: Set(city.to_string()),
    };
    model.insert(db).await
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<company::Model>, DbErr> {
    Company::find().all(db).await
}

pub async fn update_city(db: &DatabaseConnection, id: i32, city: &str) -> Result<u64, DbErr> {
    let result = Company::update_many()
        .col_expr(company::Column::CompanyCity, Expr::value(city))
        .filter(company::Column::CompanyId.eq(id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn rename_by_city(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
) -> Result<u64, DbErr> {
    let result = Company::update_many()
        .col_expr(company::Column::CompanyName, Expr::value(name))
        .filter(company::Column::CompanyCity.eq(city))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
    let result = Company::delete_many()
        .filter(company::Column::CompanyId.eq(id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

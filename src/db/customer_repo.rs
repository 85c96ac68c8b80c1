use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use super::entities::customer;
use super::entities::prelude::Customer;

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<customer::Model>, DbErr> {
    Customer::find().all(db).await
}

pub async fn find_by_code(
    db: &DatabaseConnection,
    code: &str,
) -> Result<Vec<customer::Model>, DbErr> {
    Customer::find()
        .filter(customer::Column::CustCode.eq(code))
        .all(db)
        .await
}

pub async fn find_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Vec<customer::Model>, DbErr> {
    Customer::find()
        .filter(customer::Column::CustName.eq(name))
        .all(db)
        .await
}

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::entities::order;
use super::entities::prelude::Orders;
use crate::validate::SortDirection;

/// One statement covering the whole /orders surface: optional amount filter,
/// optional ORDER BY description. The direction arrives as a whitelisted
/// token, never as statement text.
pub async fn search(
    db: &DatabaseConnection,
    amount: Option<f64>,
    sort: Option<SortDirection>,
) -> Result<Vec<order::Model>, DbErr> {
    let mut select = Orders::find();
    if let Some(amount) = amount {
        select = select.filter(order::Column::OrdAmount.eq(amount));
    }
    if let Some(sort) = sort {
        select = select.order_by(order::Column::OrdDescription, sort.order());
    }
    select.all(db).await
}

pub async fn find_by_amount(
    db: &DatabaseConnection,
    amount: f64,
) -> Result<Vec<order::Model>, DbErr> {
    search(db, Some(amount), None).await
}

//! Entity definitions mapped onto the externally-owned trade schema. The
//! tables are neither created nor migrated here; column names are declared
//! explicitly and the JSON wire shape keeps the schema's uppercase names.

#[allow(unused_imports)]
pub mod prelude {
    pub use super::company::Entity as Company;
    pub use super::customer::Entity as Customer;
    pub use super::days_order::Entity as DaysOrder;
    pub use super::despatch::Entity as Despatch;
    pub use super::food::Entity as Food;
    pub use super::item::Entity as Item;
    pub use super::order::Entity as Orders;
    pub use super::student_report::Entity as StudentReport;
}

pub mod company {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "company")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "COMPANY_ID")]
        pub company_id: i32,
        #[sea_orm(column_name = "COMPANY_NAME")]
        pub company_name: String,
        #[sea_orm(column_name = "COMPANY_CITY")]
        pub company_city: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod customer {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "customer")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "CUST_CODE")]
        pub cust_code: String,
        #[sea_orm(column_name = "CUST_NAME")]
        pub cust_name: String,
        #[sea_orm(column_name = "CUST_CITY")]
        pub cust_city: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod order {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "orders")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ORD_NUM")]
        pub ord_num: i32,
        #[sea_orm(column_name = "ORD_AMOUNT")]
        pub ord_amount: f64,
        #[sea_orm(column_name = "ADVANCE_AMOUNT")]
        pub advance_amount: f64,
        #[sea_orm(column_name = "ORD_DATE")]
        pub ord_date: Date,
        #[sea_orm(column_name = "CUST_CODE")]
        pub cust_code: String,
        #[sea_orm(column_name = "ORD_DESCRIPTION")]
        pub ord_description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "listofitem")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ITEMCODE")]
        pub itemcode: String,
        #[sea_orm(column_name = "ITEMNAME")]
        pub itemname: String,
        #[sea_orm(column_name = "BATCHCODE")]
        pub batchcode: String,
        #[sea_orm(column_name = "CONAME")]
        pub coname: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod food {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "foods")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ITEM_ID")]
        pub item_id: String,
        #[sea_orm(column_name = "ITEM_NAME")]
        pub item_name: String,
        #[sea_orm(column_name = "ITEM_UNIT")]
        pub item_unit: String,
        #[sea_orm(column_name = "COMPANY_ID")]
        pub company_id: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod despatch {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "despatch")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "DES_NUM")]
        pub des_num: String,
        #[sea_orm(column_name = "DES_DATE")]
        pub des_date: Date,
        #[sea_orm(column_name = "ORD_NUM")]
        pub ord_num: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod days_order {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "daysorder")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ORD_DATE")]
        pub ord_date: Date,
        #[sea_orm(column_name = "ORD_AMOUNT")]
        pub ord_amount: f64,
        #[sea_orm(column_name = "ADVANCE_AMOUNT")]
        pub advance_amount: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod student_report {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
    #[sea_orm(table_name = "studentreport")]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ROLLID")]
        pub rollid: i32,
        #[sea_orm(column_name = "CLASS")]
        pub class: String,
        #[sea_orm(column_name = "SECTION")]
        pub section: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

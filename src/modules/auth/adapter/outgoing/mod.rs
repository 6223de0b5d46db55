pub mod account_query_postgres;
pub mod sea_orm_entity;

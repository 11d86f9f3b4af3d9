// bootstrap.rs
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, Schema,
    Set, TransactionTrait,
};

use crate::entities::post;

pub const DUMMY_POST_TITLE: &str = "Dummy Post";
pub const DUMMY_POST_TEXT: &str = "This is a dummy post.";

/// 스키마 생성 후 더미 게시글 1건 저장
pub async fn run(db: &DatabaseConnection) -> Result<post::Model, DbErr> {
    create_all(db).await?;
    insert_dummy_post(db).await
}

/// 엔티티 정의로부터 모든 테이블 생성 (이미 있으면 건너뜀)
pub async fn create_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, post::Entity).await?;
    tracing::info!("Database and tables created successfully");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    tracing::debug!(table = entity.table_name(), "create table if not exists");
    Ok(())
}

/// 더미 게시글을 트랜잭션 안에서 저장
pub async fn insert_dummy_post(db: &DatabaseConnection) -> Result<post::Model, DbErr> {
    let txn = db.begin().await?;
    let am = post::ActiveModel {
        title: Set(DUMMY_POST_TITLE.to_owned()),
        text: Set(DUMMY_POST_TEXT.to_owned()),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(id = created.id, title = %created.title, "Dummy post added to the posts table");
    Ok(created)
}

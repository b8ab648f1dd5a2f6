use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;

use crate::server::error::AppError;


/// Builds a database with every commerce table and hands back the owning context.
async fn commerce_db() -> Result<test_utils::context::TestContext, AppError> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(test)
}

fn db(test: &test_utils::context::TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}

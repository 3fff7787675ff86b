use super::prelude::*;

use crate::db::Database;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Get every user in the directory database
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<User>>> {
        let db = ctx.data_opt::<Database>().ok_or_else(|| {
            ApiError::Unavailable("User directory is not configured".to_string()).extend()
        })?;

        let records = db.users().list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list users");
            ApiError::from(e).extend()
        })?;

        Ok(Some(records.into_iter().map(User::from).collect()))
    }
}

use super::sea_orm_entity::admin_users::{
    Column as AdminColumn, Entity as AdminEntity, Model as AdminModel,
};
use crate::auth::application::ports::outgoing::admin_query::{
    AdminQuery, AdminQueryError, AdminRecord,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: AdminModel) -> AdminRecord {
        AdminRecord {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AdminQueryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(Self::map_to_record))
    }

    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminRecord>, AdminQueryError> {
        let admin = AdminEntity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(Self::map_to_record))
    }
}

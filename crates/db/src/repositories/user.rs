//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use tourdesk_shared::Role;
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::UserRole, users};

/// Converts a stored role onto the role carried in tokens.
#[must_use]
pub const fn role_from_db(role: UserRole) -> Role {
    match role {
        UserRole::Agency => Role::Agency,
        UserRole::Customer => Role::Customer,
        UserRole::Admin => Role::Admin,
    }
}

/// Converts a token role onto the stored enum.
#[must_use]
pub const fn role_to_db(role: Role) -> UserRole {
    match role {
        Role::Agency => UserRole::Agency,
        Role::Customer => UserRole::Customer,
        Role::Admin => UserRole::Admin,
    }
}

/// User repository for account lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
    }

    /// Creates a new active user. The email is stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: Role,
    ) -> Result<users::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(email.trim().to_lowercase()),
            password_hash: Set(password_hash.to_string()),
            full_name: Set(full_name.to_string()),
            role: Set(role_to_db(role)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(&self.db).await
    }
}

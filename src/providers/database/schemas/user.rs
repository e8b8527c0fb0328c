use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const USER_COLLECTION_NAME: &str = "users";

/// Password and reset token fields are deliberately absent.
pub const QUERY_FIELDS: &[&str] = &["name", "email", "role", "createdAt"];

/// Field names stripped from raw user documents before they leave the api.
pub const HIDDEN_FIELDS: &[&str] = &["password", "resetPasswordToken", "resetPasswordExpire"];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Publisher,
    Admin,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none", rename = "_id")]
    pub id: Option<bson::oid::ObjectId>,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// bcrypt hash, never exposed through a dto
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_expire: Option<bson::DateTime>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

pub fn user_validator() -> bson::Document {
    bson::doc! {
        "bsonType": "object",
        "required": ["name", "email", "role", "password", "createdAt", "updatedAt"],
        "properties": {
            "name": { "bsonType": "string" },
            "email": { "bsonType": "string" },
            "role": {
                "enum": ["user", "publisher", "admin"]
            },
            "password": { "bsonType": "string" },
            "resetPasswordToken": { "bsonType": "string" },
            "resetPasswordExpire": { "bsonType": "date" },
            "createdAt": { "bsonType": "date" },
            "updatedAt": { "bsonType": "date" }
        }
    }
}

pub async fn setup_user_indexes(database: &mongodb::Database) -> Result<(), anyhow::Error> {
    let collection = database.collection::<User>(USER_COLLECTION_NAME);
    collection
        .create_index(
            mongodb::IndexModel::builder()
                .keys(bson::doc! { "email": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
        )
        .await?;
    Ok(())
}

pub fn user_to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        name: user.name,
        email: user.email,
        role: user.role,
        created_at: user
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_default(),
    }
}

/// Structural email check: one '@', a non-empty local part and a dotted
/// domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}

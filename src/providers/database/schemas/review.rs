use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const REVIEW_COLLECTION_NAME: &str = "reviews";

pub const QUERY_FIELDS: &[&str] = &[
    "title",
    "text",
    "rating",
    "bootcamp",
    "user",
    "createdAt",
];

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(skip_serializing_if = "Option::is_none", rename = "_id")]
    pub id: Option<bson::oid::ObjectId>,
    pub title: String,
    pub text: String,
    /// 1 to 10
    pub rating: i32,
    /// parent bootcamp
    pub bootcamp: bson::oid::ObjectId,
    /// owning user
    pub user: bson::oid::ObjectId,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub bootcamp: String,
    pub user: String,
    pub created_at: String,
}

pub fn review_validator() -> bson::Document {
    bson::doc! {
        "bsonType": "object",
        "required": ["title", "text", "rating", "bootcamp", "user", "createdAt", "updatedAt"],
        "properties": {
            "title": { "bsonType": "string" },
            "text": { "bsonType": "string" },
            "rating": {
                "bsonType": "int",
                "minimum": 1,
                "maximum": 10
            },
            "bootcamp": { "bsonType": "objectId" },
            "user": { "bsonType": "objectId" },
            "createdAt": { "bsonType": "date" },
            "updatedAt": { "bsonType": "date" }
        }
    }
}

pub async fn setup_review_indexes(database: &mongodb::Database) -> Result<(), anyhow::Error> {
    let collection = database.collection::<Review>(REVIEW_COLLECTION_NAME);
    // one review per (bootcamp, user) pair
    collection
        .create_index(
            mongodb::IndexModel::builder()
                .keys(bson::doc! { "bootcamp": 1, "user": 1 })
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

pub fn review_to_dto(review: Review) -> ReviewDto {
    ReviewDto {
        id: review.id.map(|id| id.to_hex()).unwrap_or_default(),
        title: review.title,
        text: review.text,
        rating: review.rating,
        bootcamp: review.bootcamp.to_hex(),
        user: review.user.to_hex(),
        created_at: review
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_a_review_to_its_dto() {
        let review = Review {
            id: Some(bson::oid::ObjectId::new()),
            title: "Learned a ton".to_string(),
            text: "Would recommend to anyone starting out".to_string(),
            rating: 9,
            bootcamp: bson::oid::ObjectId::new(),
            user: bson::oid::ObjectId::new(),
            created_at: bson::DateTime::now(),
            updated_at: bson::DateTime::now(),
        };

        let dto = review_to_dto(review.clone());
        assert_eq!(dto.id, review.id.unwrap().to_hex());
        assert_eq!(dto.rating, 9);
        assert_eq!(dto.bootcamp, review.bootcamp.to_hex());
    }
}

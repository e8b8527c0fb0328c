use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const COURSE_COLLECTION_NAME: &str = "courses";

pub const QUERY_FIELDS: &[&str] = &[
    "title",
    "description",
    "weeks",
    "tuition",
    "minimumSkill",
    "scholarshipAvailable",
    "bootcamp",
    "user",
    "createdAt",
];

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
pub enum MinimumSkill {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none", rename = "_id")]
    pub id: Option<bson::oid::ObjectId>,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    /// parent bootcamp
    pub bootcamp: bson::oid::ObjectId,
    /// owning user
    pub user: bson::oid::ObjectId,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub bootcamp: String,
    pub user: String,
    pub created_at: String,
}

pub fn course_validator() -> bson::Document {
    bson::doc! {
        "bsonType": "object",
        "required": [
            "title", "description", "weeks", "tuition", "minimumSkill",
            "scholarshipAvailable", "bootcamp", "user", "createdAt", "updatedAt"
        ],
        "properties": {
            "title": { "bsonType": "string" },
            "description": { "bsonType": "string" },
            "weeks": { "bsonType": "string" },
            "tuition": {
                "bsonType": ["double", "int", "long"],
                "minimum": 0
            },
            "minimumSkill": {
                "enum": ["beginner", "intermediate", "advanced"]
            },
            "scholarshipAvailable": { "bsonType": "bool" },
            "bootcamp": { "bsonType": "objectId" },
            "user": { "bsonType": "objectId" },
            "createdAt": { "bsonType": "date" },
            "updatedAt": { "bsonType": "date" }
        }
    }
}

pub async fn setup_course_indexes(database: &mongodb::Database) -> Result<(), anyhow::Error> {
    let collection = database.collection::<Course>(COURSE_COLLECTION_NAME);
    collection
        .create_index(
            mongodb::IndexModel::builder()
                .keys(bson::doc! { "bootcamp": 1 })
                .build(),
        )
        .await?;
    Ok(())
}

pub fn course_to_dto(course: Course) -> CourseDto {
    CourseDto {
        id: course.id.map(|id| id.to_hex()).unwrap_or_default(),
        title: course.title,
        description: course.description,
        weeks: course.weeks,
        tuition: course.tuition,
        minimum_skill: course.minimum_skill,
        scholarship_available: course.scholarship_available,
        bootcamp: course.bootcamp.to_hex(),
        user: course.user.to_hex(),
        created_at: course
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_convert_a_course_to_its_dto() {
        let course = Course {
            id: Some(bson::oid::ObjectId::new()),
            title: "Front End Web Development".to_string(),
            description: "12 weeks of html, css and javascript".to_string(),
            weeks: "12".to_string(),
            tuition: 8000.0,
            minimum_skill: MinimumSkill::Beginner,
            scholarship_available: true,
            bootcamp: bson::oid::ObjectId::new(),
            user: bson::oid::ObjectId::new(),
            created_at: bson::DateTime::now(),
            updated_at: bson::DateTime::now(),
        };

        let dto = course_to_dto(course.clone());
        assert_eq!(dto.id, course.id.unwrap().to_hex());
        assert_eq!(dto.bootcamp, course.bootcamp.to_hex());
        assert_eq!(dto.tuition, 8000.0);
        assert_eq!(dto.minimum_skill, MinimumSkill::Beginner);
    }

    #[test]
    fn should_serialize_minimum_skill_lowercase() {
        assert_eq!(
            serde_json::to_string(&MinimumSkill::Intermediate).unwrap(),
            "\"intermediate\""
        );
        assert_eq!(
            MinimumSkill::from_str("advanced").unwrap(),
            MinimumSkill::Advanced
        );
        assert!(MinimumSkill::from_str("expert").is_err());
    }
}

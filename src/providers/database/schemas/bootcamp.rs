use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BOOTCAMP_COLLECTION_NAME: &str = "bootcamps";

/// Fields clients may filter, select and sort on.
pub const QUERY_FIELDS: &[&str] = &[
    "name",
    "description",
    "website",
    "phone",
    "address",
    "careers",
    "housing",
    "jobAssistance",
    "jobGuarantee",
    "photo",
    "averageCost",
    "averageRating",
    "user",
    "createdAt",
];

/// GeoJSON point produced by the geocoder. Indexed with 2dsphere for
/// radius queries.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub point_type: String,
    /// [longitude, latitude]
    pub coordinates: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bootcamp {
    #[serde(skip_serializing_if = "Option::is_none", rename = "_id")]
    pub id: Option<bson::oid::ObjectId>,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    // derived fields, written only by the aggregate recalculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// owning user
    pub user: bson::oid::ObjectId,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BootcampDto {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPointDto>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub user: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeoPointDto {
    #[serde(rename = "type")]
    pub point_type: String,
    pub coordinates: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

pub fn bootcamp_validator() -> bson::Document {
    bson::doc! {
        "bsonType": "object",
        "required": [
            "name", "description", "address", "careers",
            "housing", "jobAssistance", "jobGuarantee",
            "user", "createdAt", "updatedAt"
        ],
        "properties": {
            "name": { "bsonType": "string" },
            "description": { "bsonType": "string" },
            "website": { "bsonType": "string" },
            "phone": { "bsonType": "string" },
            "address": { "bsonType": "string" },
            "location": { "bsonType": "object" },
            "careers": {
                "bsonType": "array",
                "items": { "bsonType": "string" }
            },
            "housing": { "bsonType": "bool" },
            "jobAssistance": { "bsonType": "bool" },
            "jobGuarantee": { "bsonType": "bool" },
            "photo": { "bsonType": "string" },
            "averageCost": { "bsonType": ["long", "int"] },
            "averageRating": { "bsonType": ["double", "int"] },
            "user": { "bsonType": "objectId" },
            "createdAt": { "bsonType": "date" },
            "updatedAt": { "bsonType": "date" }
        }
    }
}

pub async fn setup_bootcamp_indexes(database: &mongodb::Database) -> Result<(), anyhow::Error> {
    let collection = database.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME);
    collection
        .create_index(
            mongodb::IndexModel::builder()
                .keys(bson::doc! { "location": "2dsphere" })
                .build(),
        )
        .await?;
    collection
        .create_index(
            mongodb::IndexModel::builder()
                .keys(bson::doc! { "user": 1 })
                .build(),
        )
        .await?;
    Ok(())
}

pub fn bootcamp_to_dto(bootcamp: Bootcamp) -> BootcampDto {
    BootcampDto {
        id: bootcamp.id.map(|id| id.to_hex()).unwrap_or_default(),
        name: bootcamp.name,
        description: bootcamp.description,
        website: bootcamp.website,
        phone: bootcamp.phone,
        address: bootcamp.address,
        location: bootcamp.location.map(|location| GeoPointDto {
            point_type: location.point_type,
            coordinates: location.coordinates,
            formatted_address: location.formatted_address,
        }),
        careers: bootcamp.careers,
        housing: bootcamp.housing,
        job_assistance: bootcamp.job_assistance,
        job_guarantee: bootcamp.job_guarantee,
        photo: bootcamp.photo,
        average_cost: bootcamp.average_cost,
        average_rating: bootcamp.average_rating,
        user: bootcamp.user.to_hex(),
        created_at: bootcamp
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_a_bootcamp_to_its_dto() {
        let oid = bson::oid::ObjectId::new();
        let owner = bson::oid::ObjectId::new();
        let bootcamp = Bootcamp {
            id: Some(oid),
            name: "Devworks".to_string(),
            description: "Full stack training".to_string(),
            website: None,
            phone: None,
            address: "233 Bay State Rd Boston MA 02215".to_string(),
            location: Some(GeoPoint {
                point_type: "Point".to_string(),
                coordinates: [-71.104028, 42.350846],
                formatted_address: None,
            }),
            careers: vec!["Web Development".to_string()],
            housing: true,
            job_assistance: true,
            job_guarantee: false,
            photo: None,
            average_cost: Some(10000),
            average_rating: None,
            user: owner,
            created_at: bson::DateTime::now(),
            updated_at: bson::DateTime::now(),
        };

        let dto = bootcamp_to_dto(bootcamp.clone());
        assert_eq!(dto.id, oid.to_hex());
        assert_eq!(dto.user, owner.to_hex());
        assert_eq!(dto.name, bootcamp.name);
        assert_eq!(dto.average_cost, Some(10000));
        assert_eq!(dto.location.unwrap().coordinates, [-71.104028, 42.350846]);
    }

    #[test]
    fn should_store_documents_with_camel_case_field_names() {
        let bootcamp = Bootcamp {
            id: None,
            name: "Devworks".to_string(),
            description: "Full stack training".to_string(),
            website: None,
            phone: None,
            address: "Boston".to_string(),
            location: None,
            careers: vec![],
            housing: false,
            job_assistance: false,
            job_guarantee: false,
            photo: None,
            average_cost: None,
            average_rating: None,
            user: bson::oid::ObjectId::new(),
            created_at: bson::DateTime::now(),
            updated_at: bson::DateTime::now(),
        };
        let doc = bson::to_document(&bootcamp).unwrap();
        assert!(doc.contains_key("jobAssistance"));
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("averageCost"));
    }
}

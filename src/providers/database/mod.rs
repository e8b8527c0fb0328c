pub mod schemas;

use std::collections::HashMap;

use bson::{Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Cursor, Database};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::const_new();

async fn setup_collections(database: &Database) -> Result<(), anyhow::Error> {
    // setup validators
    let mut validators = HashMap::new();
    validators.insert(
        schemas::bootcamp::BOOTCAMP_COLLECTION_NAME,
        schemas::bootcamp::bootcamp_validator(),
    );
    validators.insert(
        schemas::course::COURSE_COLLECTION_NAME,
        schemas::course::course_validator(),
    );
    validators.insert(
        schemas::review::REVIEW_COLLECTION_NAME,
        schemas::review::review_validator(),
    );
    validators.insert(
        schemas::user::USER_COLLECTION_NAME,
        schemas::user::user_validator(),
    );

    let collections_list = database.list_collection_names().await?;
    for (collection_name, validator) in validators {
        // create collection if it doesn't exist
        if !collections_list.contains(&collection_name.to_string()) {
            database.create_collection(collection_name).await?;
        }

        // setup validator
        database
            .run_command(bson::doc! {
                "collMod": collection_name,
                "validationLevel": "strict",
                "validationAction": "error",
                "validator": bson::doc! {
                    "$jsonSchema": validator
                }
            })
            .await?;
    }

    // setup indexes
    schemas::bootcamp::setup_bootcamp_indexes(database).await?;
    schemas::course::setup_course_indexes(database).await?;
    schemas::review::setup_review_indexes(database).await?;
    schemas::user::setup_user_indexes(database).await?;

    Ok(())
}

/// Connect to mongodb and prepare collections, validators and indexes.
pub async fn setup_database(
    database_url: &str,
    database_name: &str,
) -> Result<Database, anyhow::Error> {
    let client = match Client::with_uri_str(database_url).await {
        Ok(client) => client,
        Err(e) => return Err(anyhow::anyhow!(e)),
    };

    let db = client.database(database_name);

    INIT.get_or_init(|| async {
        if let Err(e) = setup_collections(&db).await {
            tracing::error!("Error setting up collections: {}", e);
        }
    })
    .await;

    Ok(db)
}

/// Converts a mongodb cursor into a vec of type T.
pub async fn cursor_to_vec<T: DeserializeOwned>(
    mut cursor: Cursor<Document>,
) -> Result<Vec<T>, anyhow::Error> {
    let mut results = Vec::new();
    while cursor.advance().await.map_err(|e| anyhow::anyhow!(e))? {
        let doc = match cursor.deserialize_current() {
            Ok(doc) => doc,
            Err(e) => return Err(anyhow::anyhow!(e)),
        };
        let converted_doc = match bson::from_document::<T>(doc) {
            Ok(converted_doc) => converted_doc,
            Err(e) => return Err(anyhow::anyhow!(e)),
        };
        results.push(converted_doc);
    }
    Ok(results)
}

/// Renders a raw document as plain json: object ids become hex strings and
/// dates become rfc3339 strings instead of extended json subdocuments.
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    bson_to_json(&Bson::Document(doc.clone()))
}

fn bson_to_json(bson: &Bson) -> serde_json::Value {
    match bson {
        Bson::ObjectId(oid) => serde_json::Value::String(oid.to_hex()),
        Bson::DateTime(dt) => serde_json::Value::String(
            dt.try_to_rfc3339_string().unwrap_or_default(),
        ),
        Bson::Document(doc) => serde_json::Value::Object(
            doc.iter()
                .map(|(key, value)| (key.clone(), bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => serde_json::Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Whether the error is a unique index violation, e.g. a second review from
/// the same user on the same bootcamp or a duplicate email address.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}

use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;

use super::database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME};
use super::database::schemas::course::COURSE_COLLECTION_NAME;
use super::database::schemas::review::REVIEW_COLLECTION_NAME;

/// Round up to the nearest multiple of 10.
pub fn ceil_to_ten(value: f64) -> i64 {
    ((value / 10.0).ceil() as i64) * 10
}

/// Recompute the average tuition of a bootcamp's courses and write it back.
/// Called after every course commit; failures are logged and swallowed so
/// they never fail the write that triggered them.
pub async fn recalculate_average_cost(db: &Database, bootcamp_id: bson::oid::ObjectId) {
    if let Err(err) = try_recalculate_average_cost(db, bootcamp_id).await {
        tracing::warn!(
            "failed to recalculate average cost for bootcamp {}: {}",
            bootcamp_id,
            err
        );
    }
}

async fn try_recalculate_average_cost(
    db: &Database,
    bootcamp_id: bson::oid::ObjectId,
) -> Result<(), anyhow::Error> {
    let average = average_of(
        db,
        COURSE_COLLECTION_NAME,
        bootcamp_id,
        "$tuition",
    )
    .await?;
    // last course removed: clear the stale average instead of leaving it
    let update = match average {
        Some(average) => doc! { "$set": { "averageCost": ceil_to_ten(average) } },
        None => doc! { "$unset": { "averageCost": "" } },
    };
    db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .update_one(doc! { "_id": bootcamp_id }, update)
        .await?;
    Ok(())
}

/// Recompute the average rating of a bootcamp's reviews and write it back.
/// Same failure policy as the cost recalculation; the rating is stored
/// unrounded.
pub async fn recalculate_average_rating(db: &Database, bootcamp_id: bson::oid::ObjectId) {
    if let Err(err) = try_recalculate_average_rating(db, bootcamp_id).await {
        tracing::warn!(
            "failed to recalculate average rating for bootcamp {}: {}",
            bootcamp_id,
            err
        );
    }
}

async fn try_recalculate_average_rating(
    db: &Database,
    bootcamp_id: bson::oid::ObjectId,
) -> Result<(), anyhow::Error> {
    let average = average_of(
        db,
        REVIEW_COLLECTION_NAME,
        bootcamp_id,
        "$rating",
    )
    .await?;
    let update = match average {
        Some(average) => doc! { "$set": { "averageRating": average } },
        None => doc! { "$unset": { "averageRating": "" } },
    };
    db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .update_one(doc! { "_id": bootcamp_id }, update)
        .await?;
    Ok(())
}

/// Mean of `field` over every sibling document sharing the parent bootcamp,
/// or None when no siblings remain.
async fn average_of(
    db: &Database,
    collection_name: &str,
    bootcamp_id: bson::oid::ObjectId,
    field: &str,
) -> Result<Option<f64>, anyhow::Error> {
    let mut cursor = db
        .collection::<bson::Document>(collection_name)
        .aggregate(vec![
            doc! { "$match": { "bootcamp": bootcamp_id } },
            doc! { "$group": { "_id": "$bootcamp", "average": { "$avg": field } } },
        ])
        .await?;
    match cursor.try_next().await? {
        Some(group) => Ok(Some(group.get_f64("average")?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_up_to_the_nearest_ten() {
        assert_eq!(ceil_to_ten(105.0), 110);
        assert_eq!(ceil_to_ten(104.9), 110);
        assert_eq!(ceil_to_ten(110.1), 120);
    }

    #[test]
    fn should_keep_exact_multiples_of_ten() {
        // tuitions {100, 200} average to 150, already a multiple of ten
        assert_eq!(ceil_to_ten(150.0), 150);
        assert_eq!(ceil_to_ten(0.0), 0);
    }
}

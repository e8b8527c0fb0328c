use std::collections::HashMap;

use anyhow::{anyhow, bail};
use bson::{doc, Bson, Document};

/// Query parameters that drive the result shape instead of the filter.
const CONTROL_PARAMS: [&str; 4] = ["select", "sort", "limit", "page"];

/// Comparison suffixes accepted in `field[op]=value` keys, mapped to the
/// mongodb operator syntax.
const COMPARISON_OPS: [(&str, &str); 5] = [
    ("gt", "$gt"),
    ("gte", "$gte"),
    ("lt", "$lt"),
    ("lte", "$lte"),
    ("in", "$in"),
];

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Structured query produced from the inbound string parameters.
#[derive(Debug, Clone)]
pub struct TranslatedQuery {
    pub filter: Document,
    pub projection: Option<Document>,
    pub sort: Document,
    pub page: i64,
    pub limit: i64,
}

impl TranslatedQuery {
    pub fn start_index(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Translate the inbound query parameters into a mongodb filter, projection,
/// sort and page window. Only field names in `fields` may be filtered,
/// selected or sorted on; anything else is rejected rather than passed
/// through to the storage layer.
pub fn translate(
    params: &HashMap<String, String>,
    fields: &[&str],
) -> Result<TranslatedQuery, anyhow::Error> {
    let mut filter = Document::new();
    for (key, value) in params {
        if CONTROL_PARAMS.contains(&key.as_str()) {
            continue;
        }
        let (field, op) = parse_key(key)?;
        if !fields.contains(&field) {
            bail!("cannot filter on field '{}'", field);
        }
        match op {
            None => {
                filter.insert(field, parse_scalar(value));
            }
            Some(op) => {
                let mongo_op = COMPARISON_OPS
                    .iter()
                    .find(|(name, _)| *name == op)
                    .map(|(_, mongo)| *mongo)
                    .ok_or_else(|| anyhow!("unknown comparison operator '{}'", op))?;
                let operand = if op == "in" {
                    Bson::Array(value.split(',').map(parse_scalar).collect())
                } else {
                    parse_scalar(value)
                };
                // merge so that field[gte]=a&field[lte]=b forms one range clause
                match filter.get_mut(field) {
                    Some(Bson::Document(clauses)) => {
                        clauses.insert(mongo_op, operand);
                    }
                    _ => {
                        filter.insert(field, doc! { mongo_op: operand });
                    }
                }
            }
        }
    }

    let projection = match params.get("select") {
        Some(select) => Some(parse_select(select, fields)?),
        None => None,
    };
    let sort = match params.get("sort") {
        Some(sort) => parse_sort(sort, fields)?,
        None => doc! { "createdAt": -1 },
    };
    let page = params
        .get("page")
        .and_then(|page| page.parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1);
    let limit = params
        .get("limit")
        .and_then(|limit| limit.parse::<i64>().ok())
        .filter(|limit| *limit >= 1 && *limit <= MAX_LIMIT)
        .unwrap_or(DEFAULT_LIMIT);

    Ok(TranslatedQuery {
        filter,
        projection,
        sort,
        page,
        limit,
    })
}

/// Split a parameter key into its field name and optional comparison suffix,
/// e.g. `tuition[gte]` -> `("tuition", Some("gte"))`.
fn parse_key(key: &str) -> Result<(&str, Option<&str>), anyhow::Error> {
    match key.find('[') {
        None => Ok((key, None)),
        Some(open) => {
            if !key.ends_with(']') {
                bail!("malformed filter key '{}'", key);
            }
            let field = &key[..open];
            let op = &key[open + 1..key.len() - 1];
            if field.is_empty() || op.is_empty() {
                bail!("malformed filter key '{}'", key);
            }
            Ok((field, Some(op)))
        }
    }
}

/// Coerce a raw string value into the closest bson scalar. Hex strings of
/// object-id length become object ids so filters on reference fields match.
fn parse_scalar(raw: &str) -> Bson {
    if let Ok(int) = raw.parse::<i64>() {
        return Bson::Int64(int);
    }
    if let Ok(float) = raw.parse::<f64>() {
        return Bson::Double(float);
    }
    if let Ok(boolean) = raw.parse::<bool>() {
        return Bson::Boolean(boolean);
    }
    if let Ok(oid) = bson::oid::ObjectId::parse_str(raw) {
        return Bson::ObjectId(oid);
    }
    Bson::String(raw.to_string())
}

fn parse_select(select: &str, fields: &[&str]) -> Result<Document, anyhow::Error> {
    let mut projection = Document::new();
    for field in select.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        if !fields.contains(&field) {
            bail!("cannot select field '{}'", field);
        }
        projection.insert(field, 1);
    }
    if projection.is_empty() {
        bail!("select must name at least one field");
    }
    Ok(projection)
}

fn parse_sort(sort: &str, fields: &[&str]) -> Result<Document, anyhow::Error> {
    let mut order = Document::new();
    for token in sort.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (field, direction) = match token.strip_prefix('-') {
            Some(field) => (field, -1),
            None => (token, 1),
        };
        if !fields.contains(&field) {
            bail!("cannot sort on field '{}'", field);
        }
        order.insert(field, direction);
    }
    if order.is_empty() {
        bail!("sort must name at least one field");
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["name", "tuition", "careers", "housing", "createdAt", "bootcamp"];

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn should_exclude_control_params_from_the_filter() {
        let query = translate(
            &params(&[
                ("select", "name"),
                ("sort", "name"),
                ("page", "2"),
                ("limit", "5"),
                ("housing", "true"),
            ]),
            FIELDS,
        )
        .unwrap();
        assert_eq!(query.filter, doc! { "housing": true });
    }

    #[test]
    fn should_rewrite_comparison_suffixes_into_operators() {
        let query = translate(&params(&[("tuition[gte]", "10000")]), FIELDS).unwrap();
        assert_eq!(query.filter, doc! { "tuition": { "$gte": 10000_i64 } });
    }

    #[test]
    fn should_merge_two_suffixes_on_the_same_field_into_a_range() {
        let query = translate(
            &params(&[("tuition[gte]", "1000"), ("tuition[lte]", "20000")]),
            FIELDS,
        )
        .unwrap();
        let clause = query.filter.get_document("tuition").unwrap();
        assert_eq!(clause.get_i64("$gte").unwrap(), 1000);
        assert_eq!(clause.get_i64("$lte").unwrap(), 20000);
    }

    #[test]
    fn should_split_in_lists_on_commas() {
        let query = translate(&params(&[("careers[in]", "Business,UI/UX")]), FIELDS).unwrap();
        assert_eq!(
            query.filter,
            doc! { "careers": { "$in": ["Business", "UI/UX"] } }
        );
    }

    #[test]
    fn should_reject_fields_outside_the_allow_list() {
        assert!(translate(&params(&[("password", "x")]), FIELDS).is_err());
        assert!(translate(&params(&[("select", "password")]), FIELDS).is_err());
        assert!(translate(&params(&[("sort", "-password")]), FIELDS).is_err());
    }

    #[test]
    fn should_reject_unknown_comparison_operators() {
        assert!(translate(&params(&[("tuition[regex]", "1")]), FIELDS).is_err());
    }

    #[test]
    fn should_reject_malformed_filter_keys() {
        assert!(translate(&params(&[("tuition[gte", "1")]), FIELDS).is_err());
        assert!(translate(&params(&[("[gte]", "1")]), FIELDS).is_err());
    }

    #[test]
    fn should_build_a_projection_from_select() {
        let query = translate(&params(&[("select", "name,tuition")]), FIELDS).unwrap();
        let projection = query.projection.unwrap();
        assert_eq!(projection.get_i32("name").unwrap(), 1);
        assert_eq!(projection.get_i32("tuition").unwrap(), 1);
    }

    #[test]
    fn should_parse_signed_sort_tokens() {
        let query = translate(&params(&[("sort", "name,-tuition")]), FIELDS).unwrap();
        assert_eq!(query.sort.get_i32("name").unwrap(), 1);
        assert_eq!(query.sort.get_i32("tuition").unwrap(), -1);
    }

    #[test]
    fn should_default_to_newest_first_without_sort() {
        let query = translate(&params(&[]), FIELDS).unwrap();
        assert_eq!(query.sort, doc! { "createdAt": -1 });
    }

    #[test]
    fn should_coerce_page_and_limit_defaults() {
        let query = translate(&params(&[("page", "abc"), ("limit", "-3")]), FIELDS).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.start_index(), 0);
    }

    #[test]
    fn should_coerce_reference_filters_into_object_ids() {
        let oid = bson::oid::ObjectId::new();
        let query = translate(&params(&[("bootcamp", &oid.to_hex())]), FIELDS).unwrap();
        assert_eq!(query.filter.get_object_id("bootcamp").unwrap(), oid);
    }
}

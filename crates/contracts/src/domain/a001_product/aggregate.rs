use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A catalog product. Immutable once loaded; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// Incoming catalog record. The external resource may omit `id`.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(default)]
    id: Option<String>,
    name: String,
    brand: String,
    category: String,
    description: String,
    #[serde(default)]
    image: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductRecord>,
}

/// Parse the catalog resource (`{ "products": [...] }`).
///
/// A record without an id gets its zero-based position as the id. This is a
/// degraded mode: positional ids are stable only within one load and break
/// if the external catalog is reordered between sessions. Catalogs that need
/// selections to survive reordering must supply their own ids.
pub fn parse_catalog(text: &str) -> anyhow::Result<Vec<Product>> {
    let file: CatalogFile =
        serde_json::from_str(text).context("malformed catalog resource")?;
    Ok(file
        .products
        .into_iter()
        .enumerate()
        .map(|(idx, record)| Product {
            id: match record.id {
                Some(id) if !id.is_empty() => id,
                _ => idx.to_string(),
            },
            name: record.name,
            brand: record.brand,
            category: record.category,
            description: record.description,
            image: record.image,
        })
        .collect())
}

/// Result of a catalog query. "No query at all" and "query matched nothing"
/// are distinct states and render different placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Neither a category nor a search term was supplied.
    NoQuery,
    /// A query was supplied but matched zero products. `searched` carries
    /// the normalized search term, if one was part of the query.
    NoMatches { searched: Option<String> },
    Matches(Vec<Product>),
}

/// Filter the catalog by exact category and/or case-insensitive substring
/// search over name, brand, description and category. Both filters are
/// ANDed; catalog order is preserved.
pub fn filter_products(products: &[Product], category: &str, search: &str) -> FilterOutcome {
    let term = search.trim().to_lowercase();

    if category.is_empty() && term.is_empty() {
        return FilterOutcome::NoQuery;
    }

    let matches: Vec<Product> = products
        .iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| {
            if term.is_empty() {
                return true;
            }
            let haystack = format!(
                "{} {} {} {}",
                p.name, p.brand, p.description, p.category
            )
            .to_lowercase();
            haystack.contains(&term)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        FilterOutcome::NoMatches {
            searched: if term.is_empty() { None } else { Some(term) },
        }
    } else {
        FilterOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        parse_catalog(
            r#"{"products": [
                {"name": "Foam Cleanser", "brand": "Acme", "category": "cleanser", "description": "Gentle daily foam", "image": "img/foam.jpg"},
                {"id": "m-1", "name": "Day Cream", "brand": "Acme", "category": "moisturizer", "description": "Light hydration", "image": "img/day.jpg"},
                {"name": "Clay Cleanser", "brand": "Pure", "category": "cleanser", "description": "Deep pore cleanse", "image": "img/clay.jpg"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_ids_are_synthesized_from_position() {
        let products = catalog();
        assert_eq!(products[0].id, "0");
        assert_eq!(products[1].id, "m-1");
        assert_eq!(products[2].id, "2");
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn category_filter_is_exact_and_order_preserving() {
        let products = catalog();
        match filter_products(&products, "cleanser", "") {
            FilterOutcome::Matches(found) => {
                assert_eq!(found.len(), 2);
                assert_eq!(found[0].name, "Foam Cleanser");
                assert_eq!(found[1].name, "Clay Cleanser");
            }
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn search_is_case_insensitive_over_all_text_fields() {
        let products = catalog();
        match filter_products(&products, "", "  PORE ") {
            FilterOutcome::Matches(found) => {
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name, "Clay Cleanser");
            }
            other => panic!("expected matches, got {other:?}"),
        }
        // brand match
        assert!(matches!(
            filter_products(&products, "", "acme"),
            FilterOutcome::Matches(found) if found.len() == 2
        ));
    }

    #[test]
    fn filters_are_anded() {
        let products = catalog();
        assert!(matches!(
            filter_products(&products, "cleanser", "clay"),
            FilterOutcome::Matches(found) if found.len() == 1
        ));
        assert_eq!(
            filter_products(&products, "moisturizer", "clay"),
            FilterOutcome::NoMatches {
                searched: Some("clay".to_string())
            }
        );
    }

    #[test]
    fn no_query_is_distinct_from_zero_matches() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", ""), FilterOutcome::NoQuery);
        assert_eq!(filter_products(&products, "", "   "), FilterOutcome::NoQuery);
        assert_eq!(
            filter_products(&products, "suncare", ""),
            FilterOutcome::NoMatches { searched: None }
        );
    }

    #[test]
    fn filter_is_pure() {
        let products = catalog();
        let first = filter_products(&products, "cleanser", "foam");
        let second = filter_products(&products, "cleanser", "foam");
        assert_eq!(first, second);
    }
}

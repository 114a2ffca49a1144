//! Integration tests for URL construction.
//!
//! These tests verify the three router operations end to end: collection
//! URLs, relationship link URLs, and query URLs, including parameter
//! merging, pre-built URL pass-through, and the fail-fast contract
//! violations.

use jsonapi_router::{
    BaseUrl, EqualityTranslator, Filter, FilterTranslator, Query, Relationship, Resource, Router,
    Sort,
};
use url::Url;

/// Creates a router against the canonical test base.
fn test_router() -> Router {
    Router::new(BaseUrl::new("https://api.example.com").unwrap())
}

/// A minimal caller-side model for relationship tests.
struct MockArticle {
    id: Option<String>,
    url: Option<Url>,
}

impl Resource for MockArticle {
    fn resource_type(&self) -> &str {
        "articles"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

// ============================================================================
// Collection URL Tests
// ============================================================================

#[test]
fn test_collection_url_appends_resource_type_once() {
    let url = test_router().collection_url("articles");
    assert_eq!(url.as_str(), "https://api.example.com/articles");
}

#[test]
fn test_collection_url_is_stable_across_base_trailing_slash_variants() {
    let bases = [
        "https://api.example.com/v1",
        "https://api.example.com/v1/",
    ];

    for base in bases {
        let router = Router::new(BaseUrl::new(base).unwrap());
        assert_eq!(
            router.collection_url("articles").as_str(),
            "https://api.example.com/v1/articles",
            "base input: {base}"
        );
    }
}

#[test]
#[should_panic(expected = "resource type must not be empty")]
fn test_collection_url_panics_on_empty_type() {
    let _ = test_router().collection_url("");
}

// ============================================================================
// Query URL Tests: resource-identifier restriction
// ============================================================================

#[test]
fn test_single_id_is_addressed_in_the_path_without_query_string() {
    let url = test_router().query_url(&Query::new("articles").ids(["1"]));

    assert_eq!(url.as_str(), "https://api.example.com/articles/1");
    assert_eq!(url.query(), None);
}

#[test]
fn test_multiple_ids_become_filter_id_in_given_order() {
    let url = test_router().query_url(&Query::new("articles").ids(["9", "3", "7"]));

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[id]=9,3,7"
    );
}

#[test]
fn test_zero_ids_address_the_collection() {
    let url = test_router().query_url(&Query::new("articles"));

    assert_eq!(url.as_str(), "https://api.example.com/articles");
    assert_eq!(url.query(), None);
}

// ============================================================================
// Query URL Tests: includes, filters, fields, sorts, paging
// ============================================================================

#[test]
fn test_includes_render_comma_joined_in_insertion_order() {
    let url = test_router().query_url(
        &Query::new("articles")
            .include("author")
            .include("comments"),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?include=author,comments"
    );
}

#[test]
fn test_include_paths_are_used_verbatim() {
    let url = test_router().query_url(&Query::new("articles").include("comments.author"));

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?include=comments.author"
    );
}

#[test]
fn test_equality_filters_render_bracketed_field_names() {
    let url = test_router().query_url(
        &Query::new("articles").filter(Filter::equals("category", "rust")),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[category]=rust"
    );
}

#[test]
fn test_filters_on_distinct_fields_accumulate_in_order() {
    let url = test_router().query_url(
        &Query::new("articles")
            .filter(Filter::equals("category", "rust"))
            .filter(Filter::equals("published", true)),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[category]=rust&filter[published]=true"
    );
}

#[test]
fn test_colliding_filters_apply_last_write_wins_without_duplicates() {
    let url = test_router().query_url(
        &Query::new("articles")
            .filter(Filter::equals("title", "first"))
            .filter(Filter::equals("category", "rust"))
            .filter(Filter::equals("title", "second")),
    );

    // The replacement keeps the first-introduced position and the latest value.
    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[title]=second&filter[category]=rust"
    );
}

#[test]
fn test_sparse_fieldsets_render_one_parameter_per_type() {
    let url = test_router().query_url(
        &Query::new("articles")
            .fields("articles", ["title", "body"])
            .fields("people", ["name"]),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?fields[articles]=title,body&fields[people]=name"
    );
}

#[test]
fn test_sort_entries_carry_exactly_one_leading_sign_each() {
    let url = test_router().query_url(
        &Query::new("articles")
            .sort(Sort::descending("created"))
            .sort(Sort::ascending("title")),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?sort=-created,+title"
    );
}

#[test]
fn test_page_and_page_size_are_independent_parameters() {
    let router = test_router();

    let both = router.query_url(&Query::new("articles").page(2).page_size(20));
    assert_eq!(
        both.as_str(),
        "https://api.example.com/articles?page=2&page_size=20"
    );

    let page_only = router.query_url(&Query::new("articles").page(2));
    assert_eq!(page_only.as_str(), "https://api.example.com/articles?page=2");

    let size_only = router.query_url(&Query::new("articles").page_size(20));
    assert_eq!(
        size_only.as_str(),
        "https://api.example.com/articles?page_size=20"
    );
}

#[test]
fn test_full_query_renders_parameters_in_construction_order() {
    let url = test_router().query_url(
        &Query::new("articles")
            .ids(["1", "2"])
            .include("author")
            .filter(Filter::equals("category", "rust"))
            .fields("articles", ["title"])
            .sort(Sort::descending("created"))
            .page(2)
            .page_size(20),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[id]=1,2&include=author&filter[category]=rust\
         &fields[articles]=title&sort=-created&page=2&page_size=20"
    );
}

// ============================================================================
// Query URL Tests: pre-built URLs
// ============================================================================

#[test]
fn test_prebuilt_absolute_url_passes_through() {
    let url = test_router().query_url(&Query::from_url("https://other.example.com/things"));

    assert_eq!(url.as_str(), "https://other.example.com/things");
}

#[test]
fn test_prebuilt_relative_url_resolves_against_base() {
    let url = test_router().query_url(&Query::from_url("articles/17"));

    assert_eq!(url.as_str(), "https://api.example.com/articles/17");
}

#[test]
fn test_prebuilt_url_skips_identifier_path_logic() {
    let url = test_router().query_url(&Query::from_url("articles").ids(["1", "2", "3"]));

    // Identifiers in the descriptor are ignored for pre-built URLs.
    assert_eq!(url.as_str(), "https://api.example.com/articles");
}

#[test]
fn test_prebuilt_url_keeps_unrelated_existing_parameters() {
    let url = test_router().query_url(
        &Query::from_url("articles?token=abc&page=1").page(5),
    );

    // The unrelated parameter survives byte-for-byte in its original
    // position; the replaced parameter keeps its position with the new value.
    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?token=abc&page=5"
    );
}

#[test]
fn test_prebuilt_url_existing_parameter_is_replaced_in_place() {
    let url = test_router().query_url(
        &Query::from_url("articles?include=editor&foo=bar").include("author"),
    );

    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?include=author&foo=bar"
    );
}

#[test]
#[should_panic(expected = "neither a URL nor a resource type")]
fn test_query_without_url_or_type_panics() {
    let _ = test_router().query_url(&Query::default());
}

// ============================================================================
// Relationship URL Tests
// ============================================================================

#[test]
fn test_relationship_url_derives_resource_url_from_type_and_id() {
    let article = MockArticle {
        id: Some("17".to_string()),
        url: None,
    };

    let url = test_router().relationship_url(&Relationship::new("author"), &article);
    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles/17/links/author"
    );
}

#[test]
fn test_relationship_url_prefers_canonical_url_over_type_and_id() {
    let article = MockArticle {
        id: Some("17".to_string()),
        url: Some(Url::parse("https://cdn.example.com/cached/articles/99").unwrap()),
    };

    let url = test_router().relationship_url(&Relationship::new("comments"), &article);
    assert_eq!(
        url.as_str(),
        "https://cdn.example.com/cached/articles/99/links/comments"
    );
}

#[test]
#[should_panic(expected = "neither an id nor a URL")]
fn test_relationship_url_panics_for_unaddressable_resource() {
    let article = MockArticle {
        id: None,
        url: None,
    };

    let _ = test_router().relationship_url(&Relationship::new("author"), &article);
}

// ============================================================================
// Filter Translation Strategy Tests
// ============================================================================

#[test]
#[should_panic(expected = "equality only")]
fn test_default_translation_rejects_non_equality_filters() {
    let _ = test_router().query_url(
        &Query::new("articles").filter(Filter::greater_than("year", 2020)),
    );
}

#[test]
fn test_custom_translator_handles_other_operators() {
    struct SuffixedOperators;

    impl FilterTranslator for SuffixedOperators {
        fn filter_parameter(&self, filter: &Filter) -> (String, String) {
            let name = format!(
                "filter[{}][{}]",
                filter.field(),
                match filter.operator() {
                    jsonapi_router::ComparisonOperator::Equal => "eq",
                    jsonapi_router::ComparisonOperator::NotEqual => "ne",
                    jsonapi_router::ComparisonOperator::LessThan => "lt",
                    jsonapi_router::ComparisonOperator::LessThanOrEqual => "le",
                    jsonapi_router::ComparisonOperator::GreaterThan => "gt",
                    jsonapi_router::ComparisonOperator::GreaterThanOrEqual => "ge",
                }
            );
            (name, filter.value().to_string())
        }
    }

    let router = Router::with_filter_translator(
        BaseUrl::new("https://api.example.com").unwrap(),
        SuffixedOperators,
    );

    let url = router.query_url(&Query::new("articles").filter(Filter::greater_than("year", 2020)));
    assert_eq!(
        url.as_str(),
        "https://api.example.com/articles?filter[year][gt]=2020"
    );
}

#[test]
fn test_default_translator_is_directly_usable() {
    let (name, value) = EqualityTranslator.filter_parameter(&Filter::equals("title", "Dune"));
    assert_eq!(name, "filter[title]");
    assert_eq!(value, "Dune");
}

// ============================================================================
// Thread Safety
// ============================================================================

#[test]
fn test_router_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router>();
}

use axum::{
    body::to_bytes,
    extract::Query,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use chrono::NaiveDate;
use shop_backend::{
    dto::orders::CheckoutItem,
    error::AppError,
    models::Product,
    routes::params::{OrderListQuery, Pagination, ProductQuery, ProductSortBy, SortOrder},
    services::order_service::{merge_items, price_lines},
};

fn product(item_id: i32, name: &str, price: f64) -> Product {
    Product {
        item_id,
        category: "Home".into(),
        name: name.into(),
        description: String::new(),
        subcategory: "Kitchen".into(),
        price,
        avg_rating: 0.0,
        num_ratings: 0,
        popular: 0.0,
        new_arrival: 0.0,
        on_sale: 0.0,
        arrival_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

fn item(product_id: i32, quantity: i32) -> CheckoutItem {
    CheckoutItem {
        product_id,
        quantity,
    }
}

#[test]
fn pagination_defaults_and_clamps() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));

    let p = Pagination {
        page: Some(3),
        per_page: Some(500),
    };
    assert_eq!(p.normalize(), (3, 100, 200));

    let p = Pagination {
        page: Some(0),
        per_page: Some(0),
    };
    assert_eq!(p.normalize(), (1, 1, 0));

    let p = Pagination {
        page: Some(i64::MAX),
        per_page: Some(100),
    };
    let (page, per_page, offset) = p.normalize();
    assert_eq!(per_page, 100);
    assert!(page < i64::MAX);
    assert!(offset >= 0);
    assert_eq!(offset, (page - 1) * per_page);
}

#[test]
fn huge_page_in_query_string_does_not_overflow() {
    let uri: Uri = "/api/products?page=9223372036854775807&per_page=100"
        .parse()
        .unwrap();
    let Query(query) = Query::<ProductQuery>::try_from_uri(&uri).unwrap();

    let (_, _, offset) = query.pagination().normalize();
    assert!(offset >= 0);
}

#[test]
fn product_query_decodes_numbers_and_enums() {
    let uri: Uri = "/api/products?page=2&per_page=5&min_price=1.5&sort_by=avg_rating&sort_order=asc"
        .parse()
        .unwrap();
    let Query(query) = Query::<ProductQuery>::try_from_uri(&uri).unwrap();

    assert_eq!(query.pagination().normalize(), (2, 5, 5));
    assert_eq!(query.min_price, Some(1.5));
    assert!(matches!(query.sort_by, Some(ProductSortBy::AvgRating)));
    assert!(matches!(query.sort_order, Some(SortOrder::Asc)));
}

#[test]
fn order_query_accepts_status_filter() {
    let uri: Uri = "/api/orders/1?status=processing".parse().unwrap();
    let Query(query) = Query::<OrderListQuery>::try_from_uri(&uri).unwrap();

    assert_eq!(query.status.as_deref(), Some("processing"));
    assert!(query.sort_order.is_none());
}

#[test]
fn error_variants_map_to_status_codes() {
    assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::BadRequest("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Conflict("dup".into()).status_code(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::missing_parent("user", 9).status_code(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::Internal(anyhow::anyhow!("boom")).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn missing_parent_names_the_table_and_id() {
    let err = AppError::missing_parent("product", 42);
    assert!(matches!(err, AppError::ReferentialIntegrity(_)));
    assert_eq!(
        err.to_string(),
        "Referential integrity violation: product 42 does not exist"
    );
}

#[tokio::test]
async fn error_response_uses_the_envelope() {
    let response = AppError::Conflict("email taken".into()).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Constraint violation: email taken");
    assert_eq!(body["data"]["error"], "Constraint violation: email taken");
    assert!(body["meta"]["total"].is_null());
}

#[test]
fn merge_items_sums_repeated_products() {
    let merged = merge_items(&[item(2, 1), item(1, 4), item(2, 3)]).unwrap();

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[&1], 4);
    assert_eq!(merged[&2], 4);
}

#[test]
fn merge_items_rejects_empty_and_non_positive() {
    assert!(matches!(merge_items(&[]), Err(AppError::BadRequest(_))));
    assert!(matches!(
        merge_items(&[item(1, 2), item(3, 0)]),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        merge_items(&[item(1, -1)]),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn merge_items_rejects_overflowing_quantity() {
    let err = merge_items(&[item(1, i32::MAX), item(1, 1)]).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn price_lines_rounds_to_cents() {
    let priced = vec![
        (product(1, "Mug", 19.99), 3),
        (product(2, "Charger", 5.5), 2),
    ];
    let (lines, total) = price_lines(&priced);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "Mug");
    assert_eq!(lines[0].unit_price, 19.99);
    assert!((lines[0].line_total - 59.97).abs() < 1e-9);
    assert!((lines[1].line_total - 11.0).abs() < 1e-9);
    assert!((total - 70.97).abs() < 1e-9);
}

#[test]
fn price_lines_of_nothing_is_zero() {
    let (lines, total) = price_lines(&[]);
    assert!(lines.is_empty());
    assert_eq!(total, 0.0);
}

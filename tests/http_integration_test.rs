use delivery_zones::{ChannelSettings, Coordinate, HttpZoneStore, ZoneResolver, ZoneShipping};
use httpmock::prelude::*;

#[tokio::test]
async fn end_to_end_resolution_over_http_store() {
    let server = MockServer::start();
    let zones = serde_json::json!([
        {
            "id": "1",
            "name": "downtown",
            "coordinates": "[[0,0],[0,2],[2,2],[2,0],[0,0]]",
            "price": 500,
            "createdAt": "2025-11-03T10:15:30Z",
            "updatedAt": "2025-11-03T10:15:30Z"
        },
        {
            "id": "2",
            "name": "suburbs",
            "coordinates": "[[2,2],[2,6],[6,6],[6,2],[2,2]]",
            "price": 900
        }
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/delivery-zones");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(zones);
    });

    let store = HttpZoneStore::new(server.url("/admin/delivery-zones"));
    let shipping = ZoneShipping::new(
        ZoneResolver::new(store),
        ChannelSettings {
            prices_include_tax: false,
        },
    );

    let downtown = Some(Coordinate::new(1.0, 1.0));
    assert!(shipping.check_eligibility(downtown).await.unwrap());
    assert_eq!(
        shipping.calculate_price(downtown).await.unwrap().price,
        500
    );

    let suburbs = Some(Coordinate::new(4.0, 4.0));
    assert_eq!(shipping.calculate_price(suburbs).await.unwrap().price, 900);

    let nowhere = Some(Coordinate::new(50.0, 50.0));
    assert_eq!(shipping.calculate_price(nowhere).await.unwrap().price, 0);

    // One snapshot fetch per facade call.
    api_mock.assert_hits(4);
}

#[tokio::test]
async fn store_outage_surfaces_instead_of_pricing_zero() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/delivery-zones");
        then.status(503);
    });

    let store = HttpZoneStore::new(server.url("/admin/delivery-zones"));
    let shipping = ZoneShipping::new(ZoneResolver::new(store), ChannelSettings::default());

    let destination = Some(Coordinate::new(1.0, 1.0));

    let err = shipping.check_eligibility(destination).await.unwrap_err();
    assert!(err.is_storage_unavailable());

    let err = shipping.calculate_price(destination).await.unwrap_err();
    assert!(err.is_storage_unavailable());

    api_mock.assert_hits(2);
}

#[tokio::test]
async fn corrupt_zone_from_the_api_does_not_block_the_others() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/delivery-zones");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "1", "name": "broken", "coordinates": "[[0,0]", "price": 111},
                {"id": "2", "name": "downtown", "coordinates": "[[0,0],[0,2],[2,2],[2,0],[0,0]]", "price": 500}
            ]));
    });

    let store = HttpZoneStore::new(server.url("/admin/delivery-zones"));
    let shipping = ZoneShipping::new(ZoneResolver::new(store), ChannelSettings::default());

    let quote = shipping
        .calculate_price(Some(Coordinate::new(1.0, 1.0)))
        .await
        .unwrap();
    assert_eq!(quote.price, 500);
}

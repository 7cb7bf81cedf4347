#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]

use std::{collections::HashMap, time::Duration};

use payorch_sdk::{
    api_models::{
        card_details::{CardDetailsRequest, CardType, PaymentSource},
        checkout_session::{CardData, StoredMethodIdData},
        masking::Secret,
        payment_methods::{BuyerPaymentMethodsRequest, OrderBy, SortBy},
        payment_options::{
            CardContext, PaymentOptionContext, PaymentOptionsRequest, RedirectContext,
        },
    },
    Environment, Payorch, SdkError, Setup,
};
use url::Url;
use wiremock::{
    matchers::{body_json, header, header_exists, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn sandbox_setup(server: &MockServer) -> Setup {
    let mut setup = Setup::new("acme", "test-token", Environment::Sandbox);
    setup.api_url = Some(Url::parse(&server.uri()).expect("mock server uri must parse"));
    setup
}

fn payorch(server: &MockServer) -> Payorch {
    Payorch::new(sandbox_setup(server)).expect("client construction")
}

fn bin_lookup(bin: &str) -> CardDetailsRequest {
    CardDetailsRequest {
        currency: "EUR".to_string(),
        amount: None,
        bin: Some(Secret::new(bin.to_string())),
        country: None,
        intent: None,
        payment_method_id: None,
        payment_source: None,
        is_subsequent_payment: None,
        merchant_initiated: None,
    }
}

fn card_details_body(scheme: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "card-details",
        "id": "41111111",
        "card_type": "credit",
        "scheme": scheme,
        "scheme_icon_url": format!("https://cdn.payorch.app/icons/{scheme}.svg"),
        "country": "NL",
        "required_fields": {
            "first_name": true,
            "last_name": true,
            "address": { "postal_code": true },
        },
    })
}

#[tokio::test]
async fn card_details_request_rides_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .and(query_param("currency", "EUR"))
        .and(query_param("amount", "1099"))
        .and(query_param("bin", "41111111"))
        .and(query_param("payment_source", "ecommerce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_details_body("visa")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CardDetailsRequest {
        amount: Some(1099),
        country: Some("NL".to_string()),
        payment_source: Some(PaymentSource::Ecommerce),
        ..bin_lookup("41111111")
    };
    let details = payorch(&server)
        .card_details()
        .get(&request)
        .await
        .expect("card details lookup");

    assert_eq!(details.card_type, Some(CardType::Credit));
    assert_eq!(details.scheme.as_deref(), Some("visa"));
    let required = details.required_fields.expect("required fields");
    assert_eq!(required.first_name, Some(true));
    assert_eq!(
        required.address.expect("address fields").postal_code,
        Some(true)
    );
}

#[tokio::test]
async fn payment_options_post_the_filters_and_decode_contexts() {
    let server = MockServer::start().await;
    let request = PaymentOptionsRequest {
        metadata: HashMap::from([("store".to_string(), "amsterdam-1".to_string())]),
        country: Some("NL".to_string()),
        currency: Some("EUR".to_string()),
        amount: Some(2499),
        locale: Some("nl-NL".to_string()),
        cart_items: None,
    };
    Mock::given(method("POST"))
        .and(path("/payment-options"))
        .and(header("content-type", "application/json"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {
                    "type": "payment-option",
                    "method": "ideal",
                    "mode": "redirect",
                    "can_store_payment_method": false,
                    "can_delay_capture": false,
                    "label": "iDEAL",
                    "icon_url": null,
                    "context": { "redirect_requires_popup": false, "gateway": "adyen" },
                },
                {
                    "type": "payment-option",
                    "method": "card",
                    "mode": "card",
                    "can_store_payment_method": true,
                    "can_delay_capture": true,
                    "label": "Card",
                    "icon_url": null,
                    "context": { "gateway": "cybersource", "requires_security_code": true },
                },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = payorch(&server)
        .payment_options()
        .list(&request)
        .await
        .expect("payment options");

    assert_eq!(options.items.len(), 2);
    assert_eq!(
        options.items[0].context,
        Some(PaymentOptionContext::Redirect(RedirectContext {
            redirect_requires_popup: false,
            gateway: Some("adyen".to_string()),
            requires_buyer_id: None,
        }))
    );
    assert_eq!(
        options.items[1].context,
        Some(PaymentOptionContext::Card(CardContext {
            gateway: "cybersource".to_string(),
            requires_security_code: Some(true),
        }))
    );
}

#[tokio::test]
async fn buyer_payment_methods_carry_sort_order_in_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/buyers/payment-methods"))
        .and(query_param("buyer_id", "buyer_123"))
        .and(query_param("sort_by", "last_used_at"))
        .and(query_param("order_by", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{
                "type": "payment-method",
                "id": "pm_1",
                "method": "card",
                "mode": "card",
                "label": "•••• 1111",
                "scheme": "visa",
                "expiration_date": "12/29",
                "icon_url": null,
                "approval_url": null,
                "last_used_at": "2024-11-04T09:27:11Z",
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let methods = payorch(&server)
        .buyers()
        .payment_methods(&BuyerPaymentMethodsRequest {
            buyer_id: Some("buyer_123".to_string()),
            sort_by: Some(SortBy::LastUsedAt),
            order_by: Some(OrderBy::Desc),
            ..Default::default()
        })
        .await
        .expect("buyer payment methods");

    assert_eq!(methods.items.len(), 1);
    assert_eq!(methods.items[0].id, "pm_1");
    assert_eq!(methods.items[0].scheme.as_deref(), Some("visa"));
    assert!(methods.items[0].last_used_at.is_some());
}

#[tokio::test]
async fn tokenize_puts_the_tagged_payment_method() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/checkout/sessions/sess_123/fields"))
        .and(body_json(serde_json::json!({
            "payment_method": { "method": "id", "id": "pm_9", "security_code": "123" },
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let stored = CardData::StoredMethodId(StoredMethodIdData {
        id: "pm_9".to_string(),
        security_code: Some(Secret::new("123".to_string())),
    });
    payorch(&server)
        .checkout_session()
        .tokenize("sess_123", &stored)
        .await
        .expect("tokenize against the session");
}

#[tokio::test]
async fn every_request_carries_identification_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/checkout/sessions/sess_123/three-d-secure/versioning"))
        .and(header("authorization", "Bearer test-token"))
        .and(header(
            "user-agent",
            format!("payorch-sdk/{}", env!("CARGO_PKG_VERSION")),
        ))
        .and(header("x-payorch-merchant-id", "merchant_7"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "directory_server_id": "A000000004",
            "message_version": "2.2.0",
            "api_key_for_directory_server": "ds-key",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut setup = sandbox_setup(&server);
    setup.merchant_id = Some("merchant_7".to_string());
    let client = Payorch::new(setup).expect("client construction");

    let versioning = client
        .three_ds()
        .versioning("sess_123")
        .await
        .expect("versioning lookup");
    assert_eq!(versioning.directory_server_id, "A000000004");
    assert_eq!(versioning.message_version, "2.2.0");
}

#[tokio::test]
async fn non_2xx_responses_surface_status_and_extracted_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "error": "bin is too short" })),
        )
        .mount(&server)
        .await;

    let error = payorch(&server)
        .card_details()
        .get(&bin_lookup("4"))
        .await
        .expect_err("a 422 must fail the call");

    match error.current_context() {
        SdkError::Http(details) => {
            assert_eq!(details.status_code, 422);
            assert_eq!(details.message.as_deref(), Some("bin is too short"));
            assert!(details
                .raw_body
                .as_deref()
                .expect("raw body kept")
                .contains("bin is too short"));
        }
        other => panic!("expected an http error, got {other:?}"),
    }
}

#[tokio::test]
async fn mismatched_response_shape_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .mount(&server)
        .await;

    let error = payorch(&server)
        .card_details()
        .get(&bin_lookup("41111111"))
        .await
        .expect_err("an alien body must fail decoding");
    assert!(matches!(
        error.current_context(),
        SdkError::ResponseDecoding
    ));
}

#[tokio::test]
async fn slow_responses_hit_the_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(card_details_body("visa"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut setup = sandbox_setup(&server);
    setup.timeout = Some(Duration::from_millis(50));
    let client = Payorch::new(setup).expect("client construction");

    let error = client
        .card_details()
        .get(&bin_lookup("41111111"))
        .await
        .expect_err("the deadline must fire first");
    assert!(matches!(error.current_context(), SdkError::RequestTimeout));
}

#[tokio::test]
async fn callback_twin_reports_through_the_callback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_details_body("visa")))
        .expect(1)
        .mount(&server)
        .await;

    let (sender, receiver) = tokio::sync::oneshot::channel();
    payorch(&server)
        .card_details()
        .get_with_callback(bin_lookup("41111111"), move |result| {
            let _ = sender.send(result);
        });

    let details = receiver
        .await
        .expect("callback must run")
        .expect("card details lookup");
    assert_eq!(details.scheme.as_deref(), Some("visa"));
}

#[tokio::test]
async fn replacing_the_setup_moves_later_calls_to_the_new_host() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_details_body("visa")))
        .expect(1)
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path("/card-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_details_body("mastercard")))
        .expect(1)
        .mount(&second)
        .await;

    let client = payorch(&first);
    let snapshot = client.setup();

    let details = client
        .card_details()
        .get(&bin_lookup("41111111"))
        .await
        .expect("lookup against the first host");
    assert_eq!(details.scheme.as_deref(), Some("visa"));

    client.update_setup(sandbox_setup(&second));
    let details = client
        .card_details()
        .get(&bin_lookup("41111111"))
        .await
        .expect("lookup against the second host");
    assert_eq!(details.scheme.as_deref(), Some("mastercard"));

    // The snapshot taken before the swap still reads the old host.
    assert_eq!(
        snapshot.api_url,
        Some(Url::parse(&first.uri()).expect("first host uri"))
    );
}

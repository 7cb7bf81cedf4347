use std::collections::HashMap;

use payorch_sdk::{
    api_models::{
        card_details::CardDetailsRequest,
        checkout_session::{CardData, CardNumberData},
        masking::Secret,
        payment_options::PaymentOptionsRequest,
    },
    three_ds::provider::{
        ChallengeOutcome, ChallengeRequest, DeviceAuthenticationPayload, DirectoryServerParams,
        ThreeDsProvider,
    },
    CustomResult, Environment, Payorch, Setup, ThreeDsProviderError,
};

/// Terminal demo without a device 3DS runtime. Tokenization below runs with
/// authentication off, so these hooks are never reached.
struct NoDeviceRuntime;

#[async_trait::async_trait]
impl ThreeDsProvider for NoDeviceRuntime {
    type PresentationContext = ();

    fn create_transaction(
        &self,
        _params: DirectoryServerParams<'_>,
    ) -> CustomResult<DeviceAuthenticationPayload, ThreeDsProviderError> {
        Err(error_stack::report!(
            ThreeDsProviderError::InitializationFailed
        ))
    }

    async fn present_challenge(
        &self,
        _context: &Self::PresentationContext,
        _request: ChallengeRequest<'_>,
    ) -> CustomResult<ChallengeOutcome, ThreeDsProviderError> {
        Err(error_stack::report!(
            ThreeDsProviderError::ChallengePresentation
        ))
    }
}

#[tokio::main]
async fn main() {
    // Get the instance id and auth token from command line arguments
    let args = std::env::args().collect::<Vec<_>>();
    let (instance_id, auth_token) = match (args.get(1), args.get(2)) {
        (Some(instance_id), Some(auth_token)) => (instance_id.clone(), auth_token.clone()),
        _ => {
            eprintln!(
                "Usage: {} <instance-id> <auth-token> [checkout-session-id]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    // Create a client against the sandbox
    let client = Payorch::new(Setup::new(instance_id, auth_token, Environment::Sandbox))
        .expect("Failed to build the client");

    // List the payment options a sandbox checkout would show
    let options = client
        .payment_options()
        .list(&PaymentOptionsRequest {
            metadata: HashMap::new(),
            country: Some("NL".to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(1000),
            locale: Some("en".to_string()),
            cart_items: None,
        })
        .await
        .expect("Failed to list payment options");
    println!("Payment options: {:#?}", options.items);

    // Resolve scheme and required fields for a test bin
    let details = client
        .card_details()
        .get(&CardDetailsRequest {
            currency: "EUR".to_string(),
            amount: Some(1000),
            bin: Some(Secret::new("41111111".to_string())),
            country: Some("NL".to_string()),
            intent: None,
            payment_method_id: None,
            payment_source: None,
            is_subsequent_payment: None,
            merchant_initiated: None,
        })
        .await
        .expect("Failed to fetch card details");
    println!("Card details: {:#?}", details);

    // Tokenize a test card when a checkout session was supplied
    if let Some(session_id) = args.get(3) {
        let card = CardData::Card(CardNumberData {
            number: Secret::new("4111111111111111".to_string()),
            expiration_date: Secret::new("03/30".to_string()),
            security_code: Some(Secret::new("737".to_string())),
        });
        let result = client
            .tokenize(session_id, &card, &NoDeviceRuntime, &(), 5, false, None)
            .await
            .expect("Failed to tokenize the card");
        println!("Tokenize result: {:?}", result);
    }
}

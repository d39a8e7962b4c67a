//! End-to-end swap against a mocked Jupiter API and an in-memory node.

use async_trait::async_trait;
use lib_solana::confirmation::{ConfirmationOutcome, FixedInterval};
use lib_solana::jupiter::JupiterClient;
use lib_solana::types::{SendOptions, SignatureStatus, TransactionConfirmationStatus};
use lib_solana::{SigningIdentity, TransactionNode};
use lib_utils::b64::b64_encode;
use mockito::Matcher;
use serde_json::json;
use solana_sdk::message::{Message, VersionedMessage};
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::VersionedTransaction;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use swapper::services::{SwapRequest, SwapService};

/// Node that records submissions and reports every signature as finalized.
#[derive(Default)]
struct FakeNode {
    submissions: Mutex<Vec<(VersionedTransaction, SendOptions)>>,
    status_queries: Mutex<u32>,
}

#[async_trait]
impl TransactionNode for FakeNode {
    async fn send_raw_transaction(
        &self,
        raw_transaction: &[u8],
        options: &SendOptions,
    ) -> anyhow::Result<String> {
        let tx: VersionedTransaction = bincode::deserialize(raw_transaction)?;
        let txid = tx.signatures[0].to_string();
        self.submissions.lock().unwrap().push((tx, options.clone()));
        Ok(txid)
    }

    async fn get_signature_statuses(
        &self,
        signatures: &[String],
    ) -> anyhow::Result<Vec<Option<SignatureStatus>>> {
        *self.status_queries.lock().unwrap() += 1;
        Ok(signatures
            .iter()
            .map(|_| {
                Some(SignatureStatus {
                    slot: 42,
                    confirmations: None,
                    err: None,
                    confirmation_status: Some(TransactionConfirmationStatus::Finalized),
                })
            })
            .collect())
    }
}

fn quote_json() -> serde_json::Value {
    json!({
        "inputMint": "NativeToken",
        "inAmount": "100",
        "outputMint": "StableToken",
        "outAmount": "14",
        "otherAmountThreshold": "13",
        "swapMode": "ExactIn",
        "slippageBps": 50,
        "priceImpactPct": "0",
        "routePlan": [{
            "swapInfo": {
                "ammKey": "AmmKey111",
                "label": "Whirlpool",
                "inputMint": "NativeToken",
                "outputMint": "StableToken",
                "inAmount": "100",
                "outAmount": "14"
            },
            "percent": 100
        }],
        "contextSlot": 7
    })
}

fn unsigned_blob(payer: &Keypair) -> String {
    let tx = VersionedTransaction {
        signatures: vec![Signature::default()],
        message: VersionedMessage::Legacy(Message::new(&[], Some(&payer.pubkey()))),
    };
    b64_encode(bincode::serialize(&tx).unwrap())
}

#[tokio::test]
async fn test_swap_submits_once_and_confirms() {
    let keypair = Keypair::new();
    let blob = unsigned_blob(&keypair);
    let identity = SigningIdentity::from(keypair);

    let mut server = mockito::Server::new_async().await;

    let quote_mock = server
        .mock("GET", "/v6/quote")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("inputMint".into(), "NativeToken".into()),
            Matcher::UrlEncoded("outputMint".into(), "StableToken".into()),
            Matcher::UrlEncoded("amount".into(), "100".into()),
            Matcher::UrlEncoded("slippageBps".into(), "50".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(quote_json().to_string())
        .expect(1)
        .create_async()
        .await;

    let swap_mock = server
        .mock("POST", "/v6/swap")
        .match_body(Matcher::PartialJson(json!({
            "quoteResponse": quote_json(),
            "userPublicKey": identity.pubkey_string(),
            "dynamicComputeUnitLimit": true,
            "prioritizationFeeLamports": "auto",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "swapTransaction": blob, "lastValidBlockHeight": 1000 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let jupiter = JupiterClient::builder()
        .api_base(format!("{}/v6", server.url()))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let node = Arc::new(FakeNode::default());

    let service = SwapService::with_parts(
        Arc::new(jupiter),
        node.clone(),
        Duration::from_secs(30),
        Arc::new(FixedInterval::default()),
    );

    let request = SwapRequest {
        input_mint: "NativeToken".to_string(),
        output_mint: "StableToken".to_string(),
        amount: 100,
        slippage_bps: 50,
    };

    let report = service.execute(&request, &identity).await.unwrap();

    quote_mock.assert_async().await;
    swap_mock.assert_async().await;

    assert_eq!(report.outcome, ConfirmationOutcome::Confirmed);
    assert_eq!(report.quote.out_amount, "14");
    assert_eq!(*node.status_queries.lock().unwrap(), 1);

    let submissions = node.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let (sent, options) = &submissions[0];
    assert!(options.skip_preflight);
    assert_eq!(options.max_retries, Some(2));
    assert_eq!(sent.signatures[0].to_string(), report.txid);
    assert!(sent.signatures[0].verify(identity.pubkey().as_ref(), &sent.message.serialize()));
}

#[tokio::test]
async fn test_quote_failure_submits_nothing() {
    let identity = SigningIdentity::from(Keypair::new());
    let mut server = mockito::Server::new_async().await;

    let quote_mock = server
        .mock("GET", "/v6/quote")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":"Could not find any route"}"#)
        .create_async()
        .await;
    let swap_mock = server
        .mock("POST", "/v6/swap")
        .expect(0)
        .create_async()
        .await;

    let jupiter = JupiterClient::builder()
        .api_base(format!("{}/v6", server.url()))
        .build()
        .unwrap();
    let node = Arc::new(FakeNode::default());
    let service = SwapService::with_parts(
        Arc::new(jupiter),
        node.clone(),
        Duration::from_secs(30),
        Arc::new(FixedInterval::default()),
    );

    let request = SwapRequest {
        input_mint: "NativeToken".to_string(),
        output_mint: "StableToken".to_string(),
        amount: 100,
        slippage_bps: 50,
    };
    let err = service.execute(&request, &identity).await.unwrap_err();

    quote_mock.assert_async().await;
    swap_mock.assert_async().await;
    assert!(matches!(err, lib_core::SwapError::QuoteFetch { .. }));
    assert!(!err.is_fatal());
    assert!(node.submissions.lock().unwrap().is_empty());
}

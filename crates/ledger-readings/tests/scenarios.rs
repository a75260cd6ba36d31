//! End-to-end scenarios through the string invocation surface.

use std::sync::Arc;

use ledger_readings::core::{decode, Asset, DecodeMode, Sensor};
use ledger_readings::store::{MemoryStore, SqliteStore, Store};
use ledger_readings::{
    AssetContract, Chaincode, Contract, ContractConfig, Response, SensorContract,
};
use serde_json::{json, Value};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn payload_json(response: &Response) -> Value {
    assert!(response.is_success(), "call failed: {:?}", response);
    serde_json::from_slice(response.payload().unwrap()).unwrap()
}

fn listed_keys(doc: &Value) -> Vec<String> {
    doc.as_array()
        .unwrap()
        .iter()
        .map(|e| e["Key"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn asset_seed_then_add_then_aggregate() {
    let contract: AssetContract<_> = Contract::new(MemoryStore::new(), ContractConfig::default());

    assert!(contract.invoke("initLedger", &[]).is_success());
    let response = contract.invoke(
        "addReading",
        &args(&["ASSET_4", "1.0", "2.0", "7.0", "25.0", "01/01/2021 00:00"]),
    );
    assert!(response.is_success());

    let response = contract.invoke("getReading", &[]);
    let doc = payload_json(&response);
    assert_eq!(
        listed_keys(&doc),
        ["ASSET_0", "ASSET_1", "ASSET_2", "ASSET_3", "ASSET_4"]
    );
    assert_eq!(
        doc[4],
        json!({
            "Key": "ASSET_4",
            "Record values": {
                "lat": "1.0",
                "lng": "2.0",
                "ph": "7.0",
                "temp": "25.0",
                "timestamp": "01/01/2021 00:00"
            }
        })
    );

    let text = std::str::from_utf8(response.payload().unwrap()).unwrap();
    assert!(text.contains(
        r#"{"Key":"ASSET_4","Record values":{"lat":"1.0","lng":"2.0","ph":"7.0","temp":"25.0","timestamp":"01/01/2021 00:00"}}"#
    ));
}

#[test]
fn sensor_seed_lists_nine_in_order() {
    let contract: SensorContract<_> = Contract::new(MemoryStore::new(), ContractConfig::default());
    contract.invoke("initLedger", &[]);

    let doc = payload_json(&contract.invoke("getReading", &[]));
    let expected: Vec<String> = (0..9).map(|i| format!("SENSOR_{}", i)).collect();
    assert_eq!(listed_keys(&doc), expected);
    assert_eq!(doc[0]["Record values"]["model"], "DHT11");
}

#[test]
fn sensor_update_only_touches_value() {
    let contract: SensorContract<_> = Contract::new(MemoryStore::new(), ContractConfig::default());
    contract.invoke("initLedger", &[]);

    let before = contract.read_record("SENSOR_2").unwrap().unwrap();
    assert!(contract
        .invoke("updateReading", &args(&["SENSOR_2", "99.9"]))
        .is_success());

    let payload = contract
        .invoke("getReadingForID", &args(&["SENSOR_2"]))
        .payload()
        .cloned()
        .unwrap();
    let after: Sensor = decode(&payload, DecodeMode::Strict).unwrap();
    assert_eq!(after.model, before.model);
    assert_eq!(after.timestamp, before.timestamp);
    assert_eq!(after.value, "99.9");
}

#[test]
fn asset_update_replaces_all_fields() {
    let contract: AssetContract<_> = Contract::new(MemoryStore::new(), ContractConfig::default());
    contract.invoke("initLedger", &[]);

    let response = contract.invoke(
        "updateReading",
        &args(&["ASSET_1", "5", "6", "7", "8", "02/02/2022 02:02"]),
    );
    assert!(response.is_success());
    assert_eq!(
        contract.read_record("ASSET_1").unwrap(),
        Some(Asset::new("5", "6", "7", "8", "02/02/2022 02:02"))
    );
}

#[test]
fn arity_failures_name_expected_count_and_leave_store_alone() {
    let store = Arc::new(MemoryStore::new());
    let asset_contract: AssetContract<_> =
        Contract::new(Arc::clone(&store), ContractConfig::default());
    let sensor_contract: SensorContract<_> =
        Contract::new(Arc::clone(&store), ContractConfig::default());
    let asset: &dyn Chaincode = &asset_contract;
    let sensor: &dyn Chaincode = &sensor_contract;

    let cases: Vec<(&dyn Chaincode, &str, Vec<String>, &str)> = vec![
        (asset, "initLedger", args(&["x"]), "expecting 0, got 1"),
        (asset, "addReading", args(&["k", "1"]), "expecting 6, got 2"),
        (asset, "updateReading", args(&["k"]), "expecting 6, got 1"),
        (sensor, "addReading", args(&["k", "m", "t", "v", "x"]), "expecting 4, got 5"),
        (sensor, "updateReading", args(&["k", "v", "x"]), "expecting 2, got 3"),
        (sensor, "getReadingForID", args(&[]), "expecting 1, got 0"),
        (sensor, "getReading", args(&["SENSOR_0"]), "expecting 0, got 1"),
    ];

    for (contract, function, call_args, expected) in cases {
        let response = contract.invoke(function, &call_args);
        let message = response.message().unwrap();
        assert!(
            message.starts_with("incorrect number of arguments"),
            "{}: {}",
            function,
            message
        );
        assert!(message.ends_with(expected), "{}: {}", function, message);
    }

    assert!(store.is_empty().unwrap());
}

#[test]
fn get_missing_key_is_empty_success() {
    let contract: AssetContract<_> = Contract::new(MemoryStore::new(), ContractConfig::default());
    let response = contract.invoke("getReadingForID", &args(&["ASSET_77"]));
    assert_eq!(response.status(), 200);
    assert!(response.payload().unwrap().is_empty());
}

#[test]
fn legacy_update_of_missing_key_creates_from_blank() {
    let contract: SensorContract<_> = Contract::new(MemoryStore::new(), ContractConfig::legacy());
    assert!(contract
        .invoke("updateReading", &args(&["SENSOR_50", "1.5"]))
        .is_success());

    let payload = contract
        .invoke("getReadingForID", &args(&["SENSOR_50"]))
        .payload()
        .cloned()
        .unwrap();
    assert_eq!(&payload[..], br#"{"model":"","timestamp":"","value":"1.5"}"#);
}

#[test]
fn strict_rejects_foreign_record_where_legacy_reads_blank() {
    let store = Arc::new(MemoryStore::new());
    store
        .put("SENSOR_0", bytes::Bytes::from_static(br#"{"lat":"1"}"#))
        .unwrap();

    let strict: SensorContract<_> = Contract::new(Arc::clone(&store), ContractConfig::default());
    let response = strict.invoke("updateReading", &args(&["SENSOR_0", "2"]));
    assert!(response.message().unwrap().contains("SENSOR_0"));
    assert!(!strict.invoke("getReading", &[]).is_success());

    let legacy: SensorContract<_> = Contract::new(Arc::clone(&store), ContractConfig::legacy());
    assert!(legacy
        .invoke("updateReading", &args(&["SENSOR_0", "2"]))
        .is_success());
    assert_eq!(
        legacy.read_record("SENSOR_0").unwrap(),
        Some(Sensor::new("", "", "2"))
    );
}

#[test]
fn sqlite_ledger_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");

    {
        let contract: SensorContract<_> =
            Contract::new(SqliteStore::open(&path).unwrap(), ContractConfig::default());
        assert!(contract.invoke("initLedger", &[]).is_success());
        assert!(contract
            .invoke("addReading", &args(&["SENSOR_10", "DHT22", "t", "20"]))
            .is_success());
    }

    let contract: SensorContract<_> =
        Contract::new(SqliteStore::open(&path).unwrap(), ContractConfig::default());
    let doc = payload_json(&contract.invoke("getReading", &[]));
    let keys = listed_keys(&doc);
    assert_eq!(keys.len(), 10);
    // Lexicographic, so SENSOR_10 sorts between SENSOR_1 and SENSOR_2.
    assert_eq!(&keys[..3], ["SENSOR_0", "SENSOR_1", "SENSOR_10"]);
}

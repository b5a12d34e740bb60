//! Fixtures shared by the factory tests

use serde_json::{Value, json};

pub(crate) const TX_HASH: &str =
    "0xed382cb554ad10e94921d263a56c670669d6c380bbdacdbf96fed625b7132a1d";
pub(crate) const BLOCK_HASH: &str =
    "0xa32d159805750cbe428b799a49b85dcb2300f61d806786f317260e721727d162";
pub(crate) const LOGS_BLOOM: &str = "0x00000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000000000000000000000000000200000000000000000000000000000000000000000000000000200000000000000000000000000000000000000000000000000000000000000000000000000000000000000040000000010000000000000000000000006000000000000002000000000020000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004000000000000000000000000010000000000000000000000000000000000000000000000000040000000000";

pub(crate) fn log_json() -> Value {
    json!({
        "address": "0x491d6b7d6822d5d4bc88a1264e1b47791fd8e904",
        "topics": [
            "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925",
            "0x0000000000000000000000002e419a06feb47d5f640636a55a814757fa10edf9",
            "0x0000000000000000000000007645eec8bb51862a5aa855c40971b2877dae81af"
        ],
        "data": "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "blockNumber": "0xc5d489",
        "transactionHash": TX_HASH,
        "transactionIndex": "0x62",
        "blockHash": BLOCK_HASH,
        "logIndex": "0xbb",
        "removed": false
    })
}

pub(crate) fn receipt_json() -> Value {
    json!({
        "transactionHash": TX_HASH,
        "transactionIndex": "0x62",
        "blockHash": BLOCK_HASH,
        "blockNumber": "0xc5d489",
        "from": "0x2e419a06feb47d5f640636a55a814757fa10edf9",
        "to": "0x491d6b7d6822d5d4bc88a1264e1b47791fd8e904",
        "cumulativeGasUsed": "0x85262f",
        "gasUsed": "0xb886",
        "contractAddress": null,
        "logs": [log_json()],
        "logsBloom": LOGS_BLOOM,
        "type": "0x2",
        "status": "0x1"
    })
}

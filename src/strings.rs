// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! User interaction strings are stored here.

pub const REPORT_TITLE: &str = "Byte Distribution Analysis:";
pub const TABLE_HEADER: &str = "Byte | Count  | Expected       | Difference";

pub const RANDOM_LABEL: &str = "random bytes";
pub const PUBLIC_KEY_LABEL: &str = "public key bytes";
pub const TIMESTAMP_LABEL: &str = "timestamp bytes";
pub const HMAC_LABEL: &str = "hmac public key bytes";

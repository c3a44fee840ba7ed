// fixtures.rs — provides commonly used EF payloads and reply lines

/// EF_IMSI body: length byte then the 8-byte identity field
pub fn imsi_bytes() -> [u8; 9] {
    [0x08, 0x29, 0x31, 0x06, 0x41, 0x00, 0x34, 0x12, 0xF5]
}

pub fn imsi_payload() -> String {
    hex::encode_upper(imsi_bytes())
}

/// EF_LOCI body: TMSI, LAI (MCC 310, MNC 260, LAC 0001), RFU, LUS
pub fn loci_bytes() -> [u8; 11] {
    [
        0xA1, 0xB2, 0xC3, 0xD4, 0x13, 0x00, 0x62, 0x00, 0x01, 0xFF, 0x00,
    ]
}

pub fn loci_payload() -> String {
    hex::encode_upper(loci_bytes())
}

pub fn iccid_payload() -> String {
    hex::encode_upper([0x98, 0x10, 0x19, 0x00, 0x00, 0x00, 0x12, 0x34, 0x56, 0xF7])
}

/// Zero-filled body of `len` bytes
pub fn blank_payload(len: usize) -> String {
    hex::encode_upper(vec![0u8; len])
}

pub fn crsm_ok(payload: &str) -> String {
    format!("+CRSM: 144,0,\"{}\"", payload)
}

pub const DEVCONINFO_LINE: &str = "+DEVCONINFO: MN(SM-G950F);BASE(G950FXXU1AQL5);PRD(XEF);SN(CE0217121);IMEI(356000000000000);CON(AT,MTP);LOCK(NONE)#OK#";

pub fn phonebook_lines() -> Vec<&'static str> {
    vec![
        "+CPBR: 1,\"112\",129,\"SOS\"",
        "+CPBR: 2,\"+33612345678\",145,\"Doe, John\"",
        "+CPBR: 3,\"\",0,\"Empty\"",
        "OK",
    ]
}

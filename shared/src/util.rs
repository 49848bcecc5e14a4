/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a 9-character order token from the uppercase base-36 alphabet.
///
/// This is a human-quotable reference for WhatsApp follow-up, not a
/// security credential: collisions are unlikely but tolerable (36^9
/// space), and orders are reconciled manually by sales staff.
pub fn order_token() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub struct RedisKey;

impl RedisKey {
    pub fn recommendations(user_id: &str) -> String {
        format!("recommendations:{user_id}")
    }
}

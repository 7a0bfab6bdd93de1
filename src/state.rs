use bb8::Pool;
use bb8_redis::RedisConnectionManager;

#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub reviews_channel: String,
}

pub type RedisClient = Pool<RedisConnectionManager>;

#[tokio::main]
async fn main() {
    recom_engine_be::start_server().await;
}
